//! An explicit weighted directed graph as a search problem. Graphs are
//! described by a small JSON document:
//!
//! ```json
//! {
//!   "start": "A",
//!   "goals": ["C"],
//!   "edges": [ { "from": "A", "to": "B", "action": "A->B", "cost": 1.0 } ],
//!   "heuristic": { "A": 2.0, "B": 1.0 }
//! }
//! ```
//!
//! The action label defaults to `"<from>-><to>"` and the cost to 1. The
//! optional heuristic table feeds
//! [`TableHeuristic`](crate::search::heuristics::TableHeuristic).

use crate::search::{SearchProblem, Successor};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse graph file")]
    Parse(#[from] serde_json::Error),
    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: f64 },
}

/// One directed edge of the graph document.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default = "default_cost")]
    pub cost: f64,
}

fn default_cost() -> f64 {
    1.
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    start: String,
    goals: Vec<String>,
    #[serde(default)]
    edges: Vec<GraphEdge>,
    #[serde(default)]
    heuristic: HashMap<String, f64>,
}

#[derive(Debug)]
pub struct GraphProblem {
    start: String,
    goals: HashSet<String>,
    adjacency: HashMap<String, Vec<Successor<String, String>>>,
    heuristic: HashMap<String, f64>,
}

impl GraphProblem {
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, GraphError> {
        let document: GraphDocument = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    fn from_document(document: GraphDocument) -> Result<Self, GraphError> {
        let mut adjacency: HashMap<String, Vec<Successor<String, String>>> = HashMap::new();
        for edge in document.edges {
            if edge.cost < 0. {
                return Err(GraphError::NegativeCost {
                    from: edge.from,
                    to: edge.to,
                    cost: edge.cost,
                });
            }
            let action = edge
                .action
                .unwrap_or_else(|| format!("{}->{}", edge.from, edge.to));
            adjacency.entry(edge.from).or_default().push(Successor {
                state: edge.to,
                action,
                cost: edge.cost,
            });
        }
        Ok(Self {
            start: document.start,
            goals: document.goals.into_iter().collect(),
            adjacency,
            heuristic: document.heuristic,
        })
    }

    /// Per-node heuristic estimates carried by the graph document. Empty if
    /// the document had none.
    pub fn heuristic_table(&self) -> &HashMap<String, f64> {
        &self.heuristic
    }
}

impl SearchProblem for GraphProblem {
    type State = String;
    type Action = String;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, String>> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }

    /// Replays the labels from the start node. A label that is not
    /// applicable at the current node makes the whole sequence illegal,
    /// priced at infinity.
    fn cost_of_actions(&self, actions: &[String]) -> f64 {
        let mut current = self.start.clone();
        let mut total = 0.;
        for action in actions {
            let step = self
                .adjacency
                .get(&current)
                .and_then(|successors| successors.iter().find(|s| &s.action == action));
            match step {
                Some(successor) => {
                    total += successor.cost;
                    current = successor.state.clone();
                }
                None => return f64::INFINITY,
            }
        }
        total
    }
}
