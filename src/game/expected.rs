use crate::*;

impl Game {
    /// Expected payoff of every player under a profile.
    pub fn get_profile_payoffs(&self, profile: &Profile) -> anyhow::Result<Vec<Utility>> {
        profile.validate(self.shape(), self.tolerance())?;
        Ok(self.expected(profile))
    }

    /// Expected payoff of each action of the one player left unfixed.
    ///
    /// `others` holds a strategy for every player except one, which is
    /// `None`.
    pub fn one_player_payoffs(&self, others: &[Option<Strategy>]) -> anyhow::Result<Vec<Utility>> {
        anyhow::ensure!(
            others.len() == self.n(),
            "expected {} entries, one per player, got {}",
            self.n(),
            others.len()
        );
        let free = others
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(p, _)| p)
            .collect::<Vec<_>>();
        let [player] = free.as_slice() else {
            anyhow::bail!("exactly one player must be left unfixed, got {:?}", free);
        };
        let mut strategies = Vec::with_capacity(self.n());
        for (p, strategy) in others.iter().enumerate() {
            match strategy {
                Some(s) => {
                    s.validate(p, self.actions(p), self.tolerance())?;
                    strategies.push(s.clone());
                }
                None => strategies.push(Strategy::uniform(self.actions(p))),
            }
        }
        let profile = Profile::from(strategies);
        Ok((0..self.actions(*player))
            .map(|a| self.deviation(&profile, *player, a))
            .collect())
    }

    /// Expected payoffs without validation.
    pub(crate) fn expected(&self, profile: &Profile) -> Vec<Utility> {
        Joint::from(profile.sparse()).fold(vec![0.; self.n()], |mut sum, (actions, p)| {
            sum.iter_mut()
                .zip(self.payoffs().at(&actions))
                .for_each(|(s, u)| *s += p * u);
            sum
        })
    }

    /// Expected payoff to `player` for playing `action` while everyone else
    /// follows `profile`.
    pub(crate) fn deviation(&self, profile: &Profile, player: usize, action: usize) -> Utility {
        let mut sparse = profile.sparse();
        sparse[player] = vec![(action, 1.)];
        Joint::from(sparse)
            .map(|(actions, p)| p * self.payoffs().get(&actions, player))
            .sum()
    }
}
