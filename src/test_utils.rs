use crate::search::problem_formulations::GraphProblem;

/// A→B→C plus an expensive direct A→C edge. The cheapest route to C costs
/// 2, the direct edge 5 but is only one edge long.
pub const TINY_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/tiny.json"
));

/// Two routes from A to D: through B (cost 2) and through C (cost 5). The
/// cheap route is also the one discovered first, and the heuristic table is
/// admissible.
pub const DIAMOND_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/diamond.json"
));

/// A unit-cost chain A→B→C→D with a dead-end branch A→X.
pub const CORRIDOR_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/corridor.json"
));

/// The goal Z has no incoming edges; A and B form a cycle.
pub const UNSOLVABLE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/unsolvable.json"
));

/// The start state is itself a goal.
pub const TRIVIAL_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/trivial.json"
));

pub fn problem_from_text(text: &str) -> GraphProblem {
    GraphProblem::from_text(text).expect("Fixture graph must parse")
}
