use crate::*;

/// One strategy per player.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile(Vec<Strategy>);

impl From<Vec<Strategy>> for Profile {
    fn from(strategies: Vec<Strategy>) -> Self {
        Self(strategies)
    }
}

impl From<Vec<Vec<Probability>>> for Profile {
    fn from(weights: Vec<Vec<Probability>>) -> Self {
        Self(weights.into_iter().map(Strategy::from).collect())
    }
}

impl Profile {
    /// Every player commits to one action.
    pub fn pure(actions: &[usize], shape: &Shape) -> Self {
        Self(
            actions
                .iter()
                .enumerate()
                .map(|(p, a)| Strategy::pure(*a, shape.dim(p)))
                .collect(),
        )
    }
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn of(&self, player: usize) -> &Strategy {
        &self.0[player]
    }
    pub fn strategies(&self) -> &[Strategy] {
        &self.0
    }
    /// Actions each player uses with positive probability.
    pub fn support(&self) -> Support {
        Support::from(self.0.iter().map(Strategy::support).collect::<Vec<_>>())
    }
    /// Positive-probability entries per player, ready for [`Joint`].
    pub fn sparse(&self) -> Vec<Vec<(usize, Probability)>> {
        self.0.iter().map(Strategy::sparse).collect()
    }
    /// Validates every strategy against the action counts of `shape`.
    pub fn validate(&self, shape: &Shape, tolerance: Tolerance) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.n() == shape.n(),
            "profile has {} strategies but the game has {} players",
            self.n(),
            shape.n()
        );
        self.0
            .iter()
            .enumerate()
            .try_for_each(|(p, s)| s.validate(p, shape.dim(p), tolerance))
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strategies = self
            .0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", strategies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_profiles_follow_shape() {
        let shape = Shape::from(vec![2, 3]);
        let profile = Profile::pure(&[1, 2], &shape);
        assert_eq!(profile.of(0).weights(), &[0., 1.]);
        assert_eq!(profile.of(1).weights(), &[0., 0., 1.]);
        assert_eq!(profile.support(), Support::from(vec![vec![1], vec![2]]));
        assert!(profile.validate(&shape, Tolerance::default()).is_ok());
    }

    #[test]
    fn validation_names_the_mismatch() {
        let shape = Shape::from(vec![2, 2]);
        let short = Profile::from(vec![vec![0.5, 0.5]]);
        assert!(short.validate(&shape, Tolerance::default()).is_err());
        let wide = Profile::from(vec![vec![0.5, 0.5], vec![0.2, 0.2, 0.6]]);
        assert!(wide.validate(&shape, Tolerance::default()).is_err());
    }

    #[test]
    fn parses_dense_json() {
        let profile = serde_json::from_str::<Profile>("[[0.5, 0.5], [1, 0]]").unwrap();
        assert_eq!(profile, Profile::from(vec![vec![0.5, 0.5], vec![1., 0.]]));
    }
}
