use crate::search::heuristics::{TableHeuristic, ZeroHeuristic};
use crate::search::problem_formulations::GraphProblem;
use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the cost remaining from a state to the nearest
/// goal of the given problem. Estimates are non-negative; no admissibility
/// check is performed, an inadmissible heuristic silently yields a
/// suboptimal plan rather than failing.
pub trait Heuristic<P: SearchProblem>: Debug {
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicNames {
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
    #[clap(
        name = "table",
        help = "Per-node estimates taken from the graph file's heuristic \
        table, defaulting to zero for nodes without an entry."
    )]
    Table,
}

impl HeuristicNames {
    pub fn create(&self, problem: &GraphProblem) -> Box<dyn Heuristic<GraphProblem>> {
        match self {
            HeuristicNames::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicNames::Table => {
                Box::new(TableHeuristic::new(problem.heuristic_table().clone()))
            }
        }
    }
}
