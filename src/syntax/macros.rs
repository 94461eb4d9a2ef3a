#[macro_export]
macro_rules! var {
    ($v:ident) => {
        $crate::syntax::Var::from(stringify!($v))
    };
}

#[macro_export]
macro_rules! lit {
    (~$v:ident) => {
        $crate::syntax::Literal::Neg($crate::var!($v))
    };
    ($v:ident) => {
        $crate::syntax::Literal::Pos($crate::var!($v))
    };
}

#[macro_export]
macro_rules! clause {
    (@acc () -> ($($result:tt)*)) => {
        {
            let lits: Vec<$crate::syntax::Literal> = vec![$($result)*];
            lits.into_iter().collect::<$crate::syntax::Clause>()
        }
    };
    (@acc (~$v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::clause!(@acc ($($($tail)*)?) -> ($($result)* $crate::lit!(~$v),))
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::clause!(@acc ($($($tail)*)?) -> ($($result)* $crate::lit!($v),))
    };
    ($($tail:tt)*) => {
        $crate::clause!(@acc ($($tail)*) -> ())
    };
}
