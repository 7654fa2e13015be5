use crate::*;

/// A sequential game of simultaneous moves.
///
/// Implementors define the states, the per-player actions available at each
/// state, and the transition for a joint action. The [`Dag`] handles
/// expansion and backward induction.
pub trait Sequential {
    type Key: Clone + Eq + std::hash::Hash + std::fmt::Debug;
    type Action: Clone + std::fmt::Debug;

    fn players(&self) -> usize;
    /// Creates the state for `key`, terminal with scores where the game ends.
    fn spawn(&self, key: &Self::Key) -> Node<Self::Key>;
    /// Per-player actions at a state. Empty at terminal states.
    fn actions(&self, node: &Node<Self::Key>) -> Vec<Vec<Self::Action>>;
    /// The state reached when every player plays their entry of `joint`.
    fn child(&self, node: &Node<Self::Key>, joint: &[Self::Action]) -> Self::Key;
}
