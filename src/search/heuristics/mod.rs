mod heuristic;
mod table_heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicNames, HeuristicValue};
pub use table_heuristic::TableHeuristic;
pub use zero_heuristic::ZeroHeuristic;
