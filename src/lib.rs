#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// tracing_subscriber is only used by the solver binary, but cargo does not
// yet allow declaring dependencies for binaries only.
use tracing_subscriber as _;

pub mod search;

#[cfg(test)]
mod test_utils;
