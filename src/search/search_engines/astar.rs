//! This module implements the A* search algorithm: the frontier is a
//! priority queue ordered by accumulated path cost plus the heuristic
//! estimate of the cost remaining to a goal.

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
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
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
                let (child_id, is_new) = {
                    let child_node =
                        search_space.insert_or_get_node(state.clone(), action, node_id);
                    (
                        child_node.get_node_id(),
                        child_node.get_status() == SearchNodeStatus::New,
                    )
                };
                if is_new {
                    let g = g_value + OrderedFloat(cost);
                    let h = heuristic.evaluate(&state, problem);
                    statistics.increment_evaluated_nodes();
                    search_space.get_node_mut(child_id).open(g);
                    priority_queue.push(child_id, Reverse(g + h));
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
    use crate::search::{
        heuristics::{HeuristicNames, ZeroHeuristic},
        search_engines::{astar_search, uniform_cost_search},
        validate,
    };
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn astar_with_zero_heuristic_matches_ucs() {
        let problem = problem_from_text(DIAMOND_GRAPH_TEXT);
        let astar_plan = astar_search(&problem, &mut ZeroHeuristic::new()).unwrap();
        let ucs_plan = uniform_cost_search(&problem).unwrap();
        assert_eq!(astar_plan, ucs_plan);
    }

    #[test]
    fn astar_with_table_heuristic_finds_the_cheapest_plan() {
        let problem = problem_from_text(DIAMOND_GRAPH_TEXT);
        let mut heuristic = HeuristicNames::Table.create(&problem);
        let plan = astar_search(&problem, heuristic.as_mut()).unwrap();
        assert!(validate(&plan, &problem).is_ok());
        assert_eq!(plan.steps(), &["A->B".to_string(), "B->D".to_string()]);
        assert_approx_eq!(problem.cost_of_actions(plan.steps()), 2.0);
    }

    #[test]
    fn astar_returns_empty_plan_when_start_is_goal() {
        let problem = problem_from_text(TRIVIAL_GRAPH_TEXT);
        let plan = astar_search(&problem, &mut ZeroHeuristic::new()).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn astar_fails_when_no_goal_is_reachable() {
        let problem = problem_from_text(UNSOLVABLE_GRAPH_TEXT);
        assert_eq!(
            astar_search(&problem, &mut ZeroHeuristic::new()),
            Err(SearchError::NoSolutionFound)
        );
    }
}
