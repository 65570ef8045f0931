use crate::search::search_engines::search_node::SearchNodeFactory;
use crate::search::search_engines::SearchNode;
use crate::search::Plan;
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// Identifier of a node within one [`SearchSpace`]. Ids are dense and double
/// as indices into the space's node and state storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    fn index(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchSpace`] owns the bookkeeping of one search call: which states
/// have been discovered (the visited set) and how each was first reached
/// (the ancestor map, used only to reconstruct the plan). States are
/// registered exactly once; a state reached again later, even via a cheaper
/// path, keeps its first registration.
#[derive(Debug)]
pub struct SearchSpace<S, A>
where
    S: Clone + Eq + Hash,
{
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
    node_factory: SearchNodeFactory,
}

impl<S, A> SearchSpace<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();
        let mut node_factory = SearchNodeFactory::new();

        let root_node = node_factory.new_root_node();
        let root_node_id = root_node.get_node_id();
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(root_node);
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
            node_factory,
        }
    }

    /// Register a newly discovered state, or return the node it was already
    /// registered under. Parent and action are only recorded on first
    /// registration.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
    ) -> &mut SearchNode<A> {
        if let Some(&node_id) = self.registered_nodes.get(&state) {
            return self.get_node_mut(node_id);
        }
        let new_node = self.node_factory.new_node(parent_id, action);
        let node_id = new_node.get_node_id();
        self.states.push(state.clone());
        self.registered_nodes.insert(state, node_id);
        self.nodes.push(new_node);
        self.get_node_mut(node_id)
    }

    /// Walk the ancestor map from `goal_node_id` back to the root,
    /// collecting actions, and reverse them into start-to-goal order. For
    /// the root itself this yields the empty plan.
    pub fn extract_plan(&self, goal_node_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_node_id);
        while NO_NODE != current_node.get_parent_id() {
            let action = current_node
                .get_action()
                .expect("Non-root node must record an action");
            steps.push(action.clone());
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_node_id)
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes
            .get_mut(node_id.index())
            .expect("Invalid node id")
    }

    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.index()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}
