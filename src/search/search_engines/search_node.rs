use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::{NodeId, NO_NODE};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is on the frontier
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] carries the per-state bookkeeping of one search: the
/// status, the accumulated path cost, and the back-reference (parent node
/// and action) used to reconstruct the plan once a goal is found.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node within its search space
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// Accumulated path cost from the start state to this node
    g: HeuristicValue,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Parent node, `NO_NODE` for the root
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    pub fn open(&mut self, g: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}

/// Hands out nodes with dense, per-search-space ids, so that a [`NodeId`]
/// doubles as an index into the space's node and state storage.
#[derive(Debug)]
pub struct SearchNodeFactory {
    next_id: usize,
}

impl SearchNodeFactory {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Create the root node of a search space. For non-root nodes see
    /// [`SearchNodeFactory::new_node`].
    pub fn new_root_node<A>(&mut self) -> SearchNode<A> {
        SearchNode {
            node_id: self.next_node_id(),
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            action: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a node discovered by taking `action` from `parent_id`.
    pub fn new_node<A>(&mut self, parent_id: NodeId, action: A) -> SearchNode<A> {
        SearchNode {
            node_id: self.next_node_id(),
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            action: Some(action),
            parent_id,
        }
    }

    fn next_node_id(&mut self) -> NodeId {
        let node_id = NodeId::new(self.next_id);
        self.next_id += 1;
        node_id
    }
}
