//! The abstract contract between the search engines and the thing being
//! searched. Engines only ever read a problem; they never mutate it.

use std::fmt::Debug;
use std::hash::Hash;

/// One step out of a state: the state reached, the action that reaches it,
/// and the non-negative cost of taking that action.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// A search problem. States are opaque to the engines beyond equality and
/// hashing; actions are opaque labels accumulated into the returned plan.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether the given state is an acceptable end state.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All one-step successors of the given state.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a sequence of legal actions taken from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> f64;
}
