use crate::*;

impl Game {
    /// Decides whether a dense profile is a Nash equilibrium.
    ///
    /// Every action a player uses must earn the same expected payoff, and no
    /// unused action may earn more, all within tolerance. Malformed profiles
    /// are errors rather than `false`.
    pub fn is_nash(&self, profile: &Profile) -> anyhow::Result<bool> {
        profile.validate(self.shape(), self.tolerance())?;
        Ok(self.stable(profile))
    }

    /// True if some player gains beyond tolerance by switching to a pure
    /// action while everyone else holds still.
    pub fn is_dominated(&self, profile: &Profile) -> bool {
        let payoffs = self.expected(profile);
        (0..self.n()).any(|player| {
            (0..self.actions(player)).any(|action| {
                let deviation = self.deviation(profile, player, action);
                let improves = self.tolerance().gt(deviation, payoffs[player]);
                if improves {
                    log::trace!(
                        "{} dominated: player {} prefers action {} ({:.6} > {:.6})",
                        profile,
                        player,
                        action,
                        deviation,
                        payoffs[player]
                    );
                }
                improves
            })
        })
    }

    /// Equilibrium check on a profile already known to be well formed.
    pub(crate) fn stable(&self, profile: &Profile) -> bool {
        let tolerance = self.tolerance();
        for player in 0..self.n() {
            let strategy = profile.of(player);
            let mut inside: Option<Utility> = None;
            let mut outside: Option<Utility> = None;
            for action in 0..self.actions(player) {
                let utility = self.deviation(profile, player, action);
                let ok = if strategy.get(action) > 0. {
                    let indifferent = inside.is_none_or(|u| tolerance.eq(u, utility));
                    let unbeaten = outside.is_none_or(|u| tolerance.ge(utility, u));
                    inside.get_or_insert(utility);
                    indifferent && unbeaten
                } else {
                    let unprofitable = inside.is_none_or(|u| tolerance.ge(u, utility));
                    outside = Some(outside.map_or(utility, |u| u.max(utility)));
                    unprofitable
                };
                if !ok {
                    log::trace!(
                        "{} rejected: player {} action {} earns {:.6}",
                        profile,
                        player,
                        action,
                        utility
                    );
                    return false;
                }
            }
        }
        true
    }
}
