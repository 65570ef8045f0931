//! This module implements uniform cost search: the frontier is a priority
//! queue ordered by accumulated path cost from the start state.

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    search_engines::{
        NodeId, SearchEngine, SearchError, SearchNodeStatus, SearchSpace, SearchStatistics,
    },
    Plan, SearchProblem, Successor,
};

#[derive(Debug)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> Result<Plan<P::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let mut priority_queue: PriorityQueue<NodeId, Reverse<HeuristicValue>> =
            PriorityQueue::new();

        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.));
        priority_queue.push(root_node.get_node_id(), Reverse(OrderedFloat(0.)));

        while let Some((node_id, _)) = priority_queue.pop() {
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
                    let g = g_value + OrderedFloat(cost);
                    child_node.open(g);
                    priority_queue.push(child_node.get_node_id(), Reverse(g));
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
    use crate::search::{search_engines::uniform_cost_search, validate};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn ucs_finds_the_cheapest_plan() {
        let problem = problem_from_text(DIAMOND_GRAPH_TEXT);
        let plan = uniform_cost_search(&problem).unwrap();
        assert!(validate(&plan, &problem).is_ok());
        assert_eq!(plan.steps(), &["A->B".to_string(), "B->D".to_string()]);
        assert_approx_eq!(problem.cost_of_actions(plan.steps()), 2.0);
    }

    #[test]
    fn ucs_does_not_reopen_discovered_states() {
        // Both successors of A are registered during A's expansion, so C
        // keeps the expensive direct edge as its ancestor even though the
        // route through B is cheaper. Registered states are never re-pushed.
        let problem = problem_from_text(TINY_GRAPH_TEXT);
        let plan = uniform_cost_search(&problem).unwrap();
        assert_eq!(plan.steps(), &["A->C".to_string()]);
        assert_approx_eq!(problem.cost_of_actions(plan.steps()), 5.0);
    }

    #[test]
    fn ucs_returns_empty_plan_when_start_is_goal() {
        let problem = problem_from_text(TRIVIAL_GRAPH_TEXT);
        let plan = uniform_cost_search(&problem).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn ucs_fails_when_no_goal_is_reachable() {
        let problem = problem_from_text(UNSOLVABLE_GRAPH_TEXT);
        assert_eq!(
            uniform_cost_search(&problem),
            Err(SearchError::NoSolutionFound)
        );
    }
}
