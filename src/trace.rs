//! Names the spans, events and fields that normal-form transformations record with
//! [`tracing`].

// log span types:
/// Inside a transformation to CNF or DNF.
pub const NF_TRANSFORM: &str = "@nf_transform";

// log event types:
/// The input was already in the target form and is returned as is or reshaped.
pub const FAST_PATH: &str = "@fast_path";

/// The input was rewritten to a simplified NNF.
pub const SIMPLIFIED: &str = "@simplified";

/// A top-level subformula exceeded the literal limit and is encoded with auxiliary
/// variables.
pub const FALLBACK: &str = "@fallback";

/// An auxiliary variable was introduced.
pub const SUBSTITUTE: &str = "@substitute";

/// The clauses of all top-level subformulae were merged.
pub const MERGED: &str = "@merged";
