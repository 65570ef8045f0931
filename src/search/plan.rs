//! A plan is the ordered sequence of actions a search engine found, leading
//! from the start state to a goal state.

use std::fmt;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A: fmt::Display> fmt::Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .steps
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        f.write_str(&lines)
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_has_no_steps() {
        let plan: Plan<String> = Plan::empty();
        assert_eq!(plan.len(), 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn steps_keep_insertion_order() {
        let plan = Plan::new(vec!["north", "east", "east"]);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.steps(), &["north", "east", "east"]);
        assert_eq!(plan[0], "north");
    }

    #[test]
    fn display_renders_one_step_per_line() {
        let plan = Plan::new(vec!["a", "b"]);
        assert_eq!(plan.to_string(), "a\nb");
    }
}
