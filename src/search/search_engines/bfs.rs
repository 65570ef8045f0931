//! Breadth first search

use ordered_float::OrderedFloat;
use std::collections::VecDeque;

use crate::search::{
    heuristics::Heuristic,
    search_engines::{
        NodeId, SearchEngine, SearchError, SearchNodeStatus, SearchSpace, SearchStatistics,
    },
    Plan, SearchProblem, Successor,
};

#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> Result<Plan<P::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.));
        queue.push_back(root_node.get_node_id());

        while let Some(node_id) = queue.pop_front() {
            let state = search_space.get_state(node_id).clone();
            if problem.is_goal_state(&state) {
                let plan = search_space.extract_plan(node_id);
                statistics.finalise_search();
                return Ok(plan);
            }

            let g_value = search_space.get_node(node_id).get_g();
            search_space.get_node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            let successors = problem.successors(&state);
            statistics.increment_generated_successors(successors.len());
            for Successor { state, action, cost } in successors {
                let child_node = search_space.insert_or_get_node(state, action, node_id);
                if child_node.get_status() == SearchNodeStatus::New {
                    child_node.open(g_value + OrderedFloat(cost));
                    queue.push_back(child_node.get_node_id());
                    statistics.increment_generated_nodes();
                }
            }
        }

        statistics.finalise_search();
        Err(SearchError::NoSolutionFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::breadth_first_search, validate};
    use crate::test_utils::*;

    #[test]
    fn bfs_plan_reaches_a_goal_state() {
        let problem = problem_from_text(CORRIDOR_GRAPH_TEXT);
        let plan = breadth_first_search(&problem).unwrap();
        assert!(validate(&plan, &problem).is_ok());
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn bfs_returns_fewest_edge_plan_regardless_of_cost() {
        // The direct edge is expensive but one edge long; BFS optimizes edge
        // count, not cost.
        let problem = problem_from_text(TINY_GRAPH_TEXT);
        let plan = breadth_first_search(&problem).unwrap();
        assert_eq!(plan.steps(), &["A->C".to_string()]);
    }

    #[test]
    fn bfs_returns_empty_plan_when_start_is_goal() {
        let problem = problem_from_text(TRIVIAL_GRAPH_TEXT);
        let plan = breadth_first_search(&problem).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn bfs_fails_when_no_goal_is_reachable() {
        let problem = problem_from_text(UNSOLVABLE_GRAPH_TEXT);
        assert_eq!(
            breadth_first_search(&problem),
            Err(SearchError::NoSolutionFound)
        );
    }
}
