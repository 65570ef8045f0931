use crate::search::{
    heuristics::Heuristic,
    search_engines::{AStar, BFS, DFS, UCS},
    Plan, SearchProblem,
};
use clap;
use thiserror::Error;

/// The single failure mode of a search: the frontier was exhausted without
/// any state satisfying the goal test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution found")]
    NoSolutionFound,
}

/// A search engine takes a problem and returns an ordered sequence of
/// actions from the start state to a goal state, or fails. Engines that do
/// not use a heuristic ignore the `heuristic` argument.
pub trait SearchEngine<P: SearchProblem> {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> Result<Plan<P::Action>, SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "dfs", help = "Depth-first search.")]
    DFS,
    #[clap(name = "bfs", help = "Breadth-first search.")]
    BFS,
    #[clap(name = "ucs", help = "Uniform-cost search.")]
    UCS,
    #[clap(name = "astar", help = "A* search, guided by the selected heuristic.")]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> Result<Plan<P::Action>, SearchError> {
        match self {
            SearchEngineName::DFS => DFS::new().search(problem, heuristic),
            SearchEngineName::BFS => BFS::new().search(problem, heuristic),
            SearchEngineName::UCS => UCS::new().search(problem, heuristic),
            SearchEngineName::AStar => AStar::new().search(problem, heuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn every_engine_solves_the_corridor() {
        let problem = problem_from_text(CORRIDOR_GRAPH_TEXT);
        for engine in [
            SearchEngineName::DFS,
            SearchEngineName::BFS,
            SearchEngineName::UCS,
            SearchEngineName::AStar,
        ] {
            let plan = engine
                .search(&problem, &mut ZeroHeuristic::new())
                .unwrap_or_else(|e| panic!("{:?} failed: {}", engine, e));
            assert!(validate(&plan, &problem).is_ok());
        }
    }
}
