use crate::*;

/// A state in a sequential game.
///
/// Terminal states carry scores from creation. Other states receive scores
/// exactly once, from backward induction, together with the profile that
/// produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    key: K,
    terminal: bool,
    scores: Option<Vec<Utility>>,
    parents: Vec<K>,
    probs: Option<Profile>,
}

impl<K> Node<K> {
    /// A state still to be solved.
    pub fn inner(key: K) -> Self {
        Self {
            key,
            terminal: false,
            scores: None,
            parents: Vec::new(),
            probs: None,
        }
    }
    /// A state whose outcome is fixed.
    pub fn terminal(key: K, scores: Vec<Utility>) -> Self {
        Self {
            key,
            terminal: true,
            scores: Some(scores),
            parents: Vec::new(),
            probs: None,
        }
    }
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
    pub fn scores(&self) -> Option<&[Utility]> {
        self.scores.as_deref()
    }
    pub fn parents(&self) -> &[K] {
        &self.parents
    }
    /// Realized action probabilities of the equilibrium that scored this
    /// state, if it was solved rather than inherited.
    pub fn probs(&self) -> Option<&Profile> {
        self.probs.as_ref()
    }
}

impl<K> Node<K>
where
    K: PartialEq + std::fmt::Debug,
{
    pub(crate) fn adopt(&mut self, parent: K) {
        if !self.parents.contains(&parent) {
            self.parents.push(parent);
        }
    }
    pub(crate) fn score(&mut self, scores: Vec<Utility>, probs: Option<Profile>) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.scores.is_none(),
            "scores of {:?} are final: {:?}",
            self.key,
            self.scores
        );
        self.scores = Some(scores);
        self.probs = probs;
        Ok(())
    }
}
