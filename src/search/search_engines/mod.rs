mod astar;
mod bfs;
mod dfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchError};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use ucs::UCS;

use crate::search::heuristics::{Heuristic, ZeroHeuristic};
use crate::search::{Plan, SearchProblem};

/// Search the deepest discovered states first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    DFS::new().search(problem, &mut ZeroHeuristic::new())
}

/// Search the shallowest discovered states first.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    BFS::new().search(problem, &mut ZeroHeuristic::new())
}

/// Search the state of least accumulated path cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    UCS::new().search(problem, &mut ZeroHeuristic::new())
}

/// Search the state of least accumulated path cost plus heuristic estimate
/// first. With the zero heuristic this reduces to uniform cost search.
pub fn astar_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
) -> Result<Plan<P::Action>, SearchError> {
    AStar::new().search(problem, heuristic)
}
