use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::SearchProblem;

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn zero_heuristic_is_zero_everywhere() {
        let problem = problem_from_text(TINY_GRAPH_TEXT);
        let mut heuristic = ZeroHeuristic::new();
        for node in ["A", "B", "C"] {
            assert_eq!(
                heuristic.evaluate(&node.to_string(), &problem),
                HeuristicValue::from(0.)
            );
        }
    }
}
