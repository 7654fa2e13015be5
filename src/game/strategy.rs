use crate::*;

/// One player's mixed strategy, dense over that player's actions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Strategy(Vec<Probability>);

impl From<Vec<Probability>> for Strategy {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl Strategy {
    /// Certainty on one action.
    pub fn pure(action: usize, actions: usize) -> Self {
        let mut weights = vec![0.; actions];
        weights[action] = 1.;
        Self(weights)
    }
    /// Even weight on every action.
    pub fn uniform(actions: usize) -> Self {
        Self(vec![1. / actions as Probability; actions])
    }
    /// Densifies `{action: probability}` entries.
    pub fn from_sparse<I>(entries: I, actions: usize) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (usize, Probability)>,
    {
        let mut weights = vec![0.; actions];
        for (action, probability) in entries {
            anyhow::ensure!(
                action < actions,
                "action {} outside 0..{}",
                action,
                actions
            );
            weights[action] += probability;
        }
        Ok(Self(weights))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn weights(&self) -> &[Probability] {
        &self.0
    }
    pub fn get(&self, action: usize) -> Probability {
        self.0[action]
    }
    /// Actions played with positive probability.
    pub fn support(&self) -> Vec<usize> {
        self.sparse().into_iter().map(|(a, _)| a).collect()
    }
    /// `(action, probability)` for actions played with positive probability.
    pub fn sparse(&self) -> Vec<(usize, Probability)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, p)| *p > 0.)
            .collect()
    }
    /// Checks length, signs, and total mass.
    pub fn validate(&self, player: usize, actions: usize, tolerance: Tolerance) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.len() == actions,
            "strategy for player {} has {} entries but the player has {} actions",
            player,
            self.len(),
            actions
        );
        if let Some((action, p)) = self.0.iter().enumerate().find(|(_, p)| **p < 0. || !p.is_finite()) {
            anyhow::bail!(
                "negative probability {} for player {} action {}",
                p,
                player,
                action
            );
        }
        let total = self.0.iter().sum::<Probability>();
        anyhow::ensure!(
            tolerance.eq(total, 1.),
            "probabilities for player {} sum to {} instead of 1",
            player,
            total
        );
        Ok(())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weights = self
            .0
            .iter()
            .map(|p| format!("{:.4}", p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", weights)
    }
}
