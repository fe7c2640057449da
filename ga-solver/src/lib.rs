//! The formulas generated by `ga-solver`, and the plumbing to evaluate them.

pub mod error;
pub mod formula;

pub use error::Error;
pub use formula::{evaluate, Formula, BUILTIN, QUAT_MUL, ROTATE};
