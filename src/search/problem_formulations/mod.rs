mod graph_problem;

pub use graph_problem::{GraphEdge, GraphError, GraphProblem};
