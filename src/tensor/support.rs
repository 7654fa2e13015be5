use crate::*;

/// A candidate equilibrium support: one nonempty action subset per player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Support(Vec<Vec<usize>>);

impl From<Vec<Vec<usize>>> for Support {
    fn from(actions: Vec<Vec<usize>>) -> Self {
        Self(actions)
    }
}

impl Support {
    /// Number of players.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// Supported actions of one player.
    pub fn of(&self, player: usize) -> &[usize] {
        &self.0[player]
    }
    /// Per-player supported actions.
    pub fn actions(&self) -> &[Vec<usize>] {
        &self.0
    }
    /// Every player plays exactly one action.
    pub fn is_pure(&self) -> bool {
        self.0.iter().all(|s| s.len() == 1)
    }
    /// Players with more than one supported action.
    pub fn mixers(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, s)| s.len() > 1)
            .map(|(p, _)| p)
    }
    /// The single action profile of a pure support.
    pub fn pure(&self) -> Option<Vec<usize>> {
        self.0
            .iter()
            .map(|s| match s.as_slice() {
                [a] => Some(*a),
                _ => None,
            })
            .collect()
    }
    /// Checks the support against a game's action counts.
    pub fn validate(&self, shape: &Shape) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.n() == shape.n(),
            "support names {} players but the game has {}",
            self.n(),
            shape.n()
        );
        for (player, actions) in self.0.iter().enumerate() {
            anyhow::ensure!(
                !actions.is_empty(),
                "support for player {} is empty",
                player
            );
            anyhow::ensure!(
                actions.windows(2).all(|w| w[0] < w[1]),
                "support for player {} must be strictly increasing: {:?}",
                player,
                actions
            );
            anyhow::ensure!(
                actions.iter().all(|a| *a < shape.dim(player)),
                "support for player {} has actions {:?} outside 0..{}",
                player,
                actions,
                shape.dim(player)
            );
        }
        Ok(())
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Every support combination over a shape.
///
/// The Cartesian product of each player's nonempty action subsets. The count
/// is the product of `2^k - 1` over action counts `k`, which is the dominant
/// cost of full equilibrium enumeration.
pub struct Supports {
    subsets: Vec<Vec<Vec<usize>>>,
    indices: Indices,
}

impl From<&Shape> for Supports {
    fn from(shape: &Shape) -> Self {
        let subsets = shape
            .dims()
            .iter()
            .map(|k| subsets(*k))
            .collect::<Vec<_>>();
        let indices = Indices::from(subsets.iter().map(Vec::len).collect::<Vec<_>>());
        Self { subsets, indices }
    }
}

impl Iterator for Supports {
    type Item = Support;
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|picks| {
            Support::from(
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(player, i)| self.subsets[player][i].clone())
                    .collect::<Vec<_>>(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_support_combinations() {
        let shape = Shape::from(vec![2, 3]);
        assert_eq!(Supports::from(&shape).count(), 3 * 7);
        let shape = Shape::from(vec![2, 2, 2]);
        assert_eq!(Supports::from(&shape).count(), 27);
    }

    #[test]
    fn pure_supports_match_action_profiles() {
        let shape = Shape::from(vec![2, 3]);
        let pure = Supports::from(&shape)
            .filter(Support::is_pure)
            .filter_map(|s| s.pure())
            .collect::<Vec<_>>();
        assert_eq!(pure, shape.indices().collect::<Vec<_>>());
    }

    #[test]
    fn mixers_skip_singletons() {
        let support = Support::from(vec![vec![0, 1], vec![2], vec![0, 2]]);
        assert_eq!(support.mixers().collect::<Vec<_>>(), vec![0, 2]);
        assert!(!support.is_pure());
        assert_eq!(support.pure(), None);
    }

    #[test]
    fn validation_rejects_bad_supports() {
        let shape = Shape::from(vec![2, 2]);
        assert!(Support::from(vec![vec![0], vec![1]]).validate(&shape).is_ok());
        assert!(Support::from(vec![vec![0]]).validate(&shape).is_err());
        assert!(Support::from(vec![vec![], vec![1]]).validate(&shape).is_err());
        assert!(Support::from(vec![vec![1, 0], vec![1]]).validate(&shape).is_err());
        assert!(Support::from(vec![vec![0, 2], vec![1]]).validate(&shape).is_err());
    }
}
