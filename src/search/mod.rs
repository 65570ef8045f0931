pub mod heuristics;
mod plan;
mod problem;
pub mod problem_formulations;
pub mod search_engines;
mod validate;

pub use plan::Plan;
pub use problem::{SearchProblem, Successor};
pub use validate::validate;
