use crate::*;

/// Iterated elimination of strictly dominated strategies.
///
/// Both passes look only at opponent action combinations in which no
/// opponent plays an already dominated action, and both run to a fixed
/// point before reporting whether they found anything.
impl Game {
    /// Alternates single and combination dominance until neither progresses.
    pub fn iesds(&mut self) -> &Dominated {
        loop {
            let single = self.iesds1();
            let combo = self.iesds2();
            if !single && !combo {
                break;
            }
        }
        log::debug!("dominated after elimination {}", self.dominated());
        self.dominated()
    }

    /// Eliminates actions strictly beaten by a single other action.
    /// Returns true if anything new was eliminated.
    pub fn iesds1(&mut self) -> bool {
        let mut progress = false;
        loop {
            let mut found = false;
            for player in 0..self.n() {
                for victim in self.live(player) {
                    let dominant = self
                        .live(player)
                        .into_iter()
                        .filter(|a| *a != victim)
                        .find(|a| self.beats(player, *a, victim));
                    if let Some(dominant) = dominant {
                        log::debug!(
                            "player {} action {} dominated by action {}",
                            player,
                            victim,
                            dominant
                        );
                        found |= self.dominated_mut().insert(player, victim);
                    }
                }
            }
            progress |= found;
            if !found {
                return progress;
            }
        }
    }

    /// Eliminates actions strictly beaten by a mix of two other actions.
    /// Returns true if anything new was eliminated.
    pub fn iesds2(&mut self) -> bool {
        let mut progress = false;
        loop {
            let mut found = false;
            for player in 0..self.n() {
                for victim in self.live(player) {
                    let others = self
                        .live(player)
                        .into_iter()
                        .filter(|a| *a != victim)
                        .collect::<Vec<_>>();
                    let pair = others
                        .iter()
                        .enumerate()
                        .flat_map(|(i, b)| others[i + 1..].iter().map(move |c| (*b, *c)))
                        .find(|(b, c)| self.combo_dominates(player, victim, *b, *c));
                    if let Some((b, c)) = pair {
                        log::debug!(
                            "player {} action {} dominated by a mix of actions {} and {}",
                            player,
                            victim,
                            b,
                            c
                        );
                        found |= self.dominated_mut().insert(player, victim);
                    }
                }
            }
            progress |= found;
            if !found {
                return progress;
            }
        }
    }

    /// Whether some mix `p·b + (1 − p)·c` strictly beats `a` for `player`
    /// against every live opponent combination.
    ///
    /// Where only `b` beats `a` the mix needs `p` above the break-even point;
    /// where only `c` does it needs `p` below it. The bounds are strict and
    /// must leave room inside `[0, 1]`.
    pub fn combo_dominates(&self, player: usize, a: usize, b: usize, c: usize) -> bool {
        let tolerance = self.tolerance();
        let mut lo = f64::NEG_INFINITY;
        let mut hi = f64::INFINITY;
        for mut profile in self.opponents(player) {
            let mut utility = |action| {
                profile[player] = action;
                self.payoffs().get(&profile, player)
            };
            let (ua, ub, uc) = (utility(a), utility(b), utility(c));
            let even = (ua - uc) / (ub - uc);
            match (tolerance.gt(ub, ua), tolerance.gt(uc, ua)) {
                (true, true) => continue,
                (false, false) => return false,
                (true, false) => lo = lo.max(even),
                (false, true) => hi = hi.min(even),
            }
            if lo >= hi {
                return false;
            }
        }
        lo < 1. && hi > 0.
    }
}

impl Game {
    /// Actions of `player` not yet dominated.
    fn live(&self, player: usize) -> Vec<usize> {
        (0..self.actions(player))
            .filter(|a| !self.dominated().contains(player, *a))
            .collect()
    }
    /// Full action profiles over live opponent actions. The entry for
    /// `player` is a placeholder to overwrite.
    fn opponents(&self, player: usize) -> impl Iterator<Item = Vec<usize>> + '_ {
        let lists = (0..self.n())
            .map(|p| if p == player { vec![0] } else { self.live(p) })
            .collect::<Vec<_>>();
        Indices::from(lists.iter().map(Vec::len).collect::<Vec<_>>()).map(move |picks| {
            picks
                .iter()
                .enumerate()
                .map(|(p, i)| lists[p][*i])
                .collect()
        })
    }
    /// Whether `a` strictly beats `b` for `player` against every live
    /// opponent combination.
    fn beats(&self, player: usize, a: usize, b: usize) -> bool {
        let tolerance = self.tolerance();
        self.opponents(player).all(|mut profile| {
            profile[player] = a;
            let ua = self.payoffs().get(&profile, player);
            profile[player] = b;
            let ub = self.payoffs().get(&profile, player);
            tolerance.gt(ua, ub)
        })
    }
}
