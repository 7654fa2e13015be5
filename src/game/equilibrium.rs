use crate::*;
use std::collections::BTreeMap;

/// A solved support: each player's `(action, probability)` entries.
///
/// Probabilities are [`Affine`]: concrete values, or expressions in free
/// unknowns when the indifference system leaves a family of solutions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Equilibrium(Vec<Vec<(usize, Affine)>>);

impl From<Vec<Vec<(usize, Affine)>>> for Equilibrium {
    fn from(entries: Vec<Vec<(usize, Affine)>>) -> Self {
        Self(entries)
    }
}

impl From<(&Support, &Solution)> for Equilibrium {
    fn from((support, solution): (&Support, &Solution)) -> Self {
        Self(
            (0..support.n())
                .map(|p| match support.of(p) {
                    [action] => vec![(*action, Affine::from(1.))],
                    actions => actions
                        .iter()
                        .map(|a| {
                            let var = Var::from((p, *a));
                            let value = solution.get(&var).cloned().unwrap_or(Affine::from(var));
                            (*a, value)
                        })
                        .collect(),
                })
                .collect(),
        )
    }
}

impl Equilibrium {
    /// Pure equilibrium on one action per player.
    pub fn pure(actions: &[usize]) -> Self {
        Self(
            actions
                .iter()
                .map(|a| vec![(*a, Affine::from(1.))])
                .collect(),
        )
    }
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn of(&self, player: usize) -> &[(usize, Affine)] {
        &self.0[player]
    }
    pub fn support(&self) -> Support {
        Support::from(
            self.0
                .iter()
                .map(|entries| entries.iter().map(|(a, _)| *a).collect())
                .collect::<Vec<_>>(),
        )
    }
    /// True if any probability is still an expression.
    pub fn is_parametric(&self) -> bool {
        self.0.iter().flatten().any(|(_, p)| !p.is_constant())
    }
    /// Every unknown a probability depends on.
    pub fn free(&self) -> Vec<Var> {
        let mut free = self
            .0
            .iter()
            .flatten()
            .flat_map(|(_, p)| p.vars())
            .collect::<Vec<_>>();
        free.sort();
        free.dedup();
        free
    }

    /// A representative dense profile.
    ///
    /// Each free unknown takes an even share of its player's unassigned mass:
    /// one minus the player's concrete probabilities, split across the
    /// player's expression-valued actions. Dependent probabilities are then
    /// evaluated.
    pub fn concrete(&self, shape: &Shape) -> Profile {
        let share = (0..self.n())
            .map(|p| {
                let entries = self.of(p);
                let fixed = entries.iter().filter_map(|(_, x)| x.value()).sum::<f64>();
                let open = entries.iter().filter(|(_, x)| !x.is_constant()).count();
                match open {
                    0 => 0.,
                    k => (1. - fixed) / k as f64,
                }
            })
            .collect::<Vec<_>>();
        let assignment = self
            .free()
            .into_iter()
            .map(|v| (v, share[v.player]))
            .collect::<BTreeMap<Var, f64>>();
        Profile::from(
            (0..self.n())
                .map(|p| {
                    let mut weights = vec![0.; shape.dim(p)];
                    for (a, x) in self.of(p) {
                        weights[*a] = x.eval(|v| assignment.get(&v).copied().unwrap_or_default());
                    }
                    Strategy::from(weights)
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Whether every probability, concrete or concretized, lies in (0, 1].
    pub fn admissible(&self, shape: &Shape, tolerance: Tolerance) -> bool {
        let within = |p: f64| tolerance.gt(p, 0.) && tolerance.ge(1., p);
        let constants = self
            .0
            .iter()
            .flatten()
            .filter_map(|(_, p)| p.value())
            .all(within);
        match (constants, self.is_parametric()) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => {
                let profile = self.concrete(shape);
                self.0.iter().enumerate().all(|(p, entries)| {
                    entries
                        .iter()
                        .all(|(a, _)| within(profile.of(p).get(*a)))
                })
            }
        }
    }

    /// Expected payoff of every player under the concrete profile.
    pub fn payoffs(&self, game: &Game) -> Vec<Utility> {
        game.expected(&self.concrete(game.shape()))
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players = self
            .0
            .iter()
            .map(|entries| {
                let entries = entries
                    .iter()
                    .map(|(a, p)| format!("{}: {}", a, p))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", entries)
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_equilibria_display() {
        let eq = Equilibrium::pure(&[1, 0]);
        assert_eq!(eq.to_string(), "[{1: 1.0000}, {0: 1.0000}]");
        assert_eq!(eq.support(), Support::from(vec![vec![1], vec![0]]));
        assert!(!eq.is_parametric());
    }

    #[test]
    fn free_unknowns_split_remaining_mass() {
        // player 0: p0 = 0.5 - p1, p1 free, p2 = 0.5
        let p1 = Var::from((0, 1));
        let eq = Equilibrium::from(vec![
            vec![
                (0, Affine::new(0.5, [(p1, -1.)])),
                (1, Affine::from(p1)),
                (2, Affine::from(0.5)),
            ],
            vec![(0, Affine::from(1.))],
        ]);
        let shape = Shape::from(vec![3, 1]);
        let profile = eq.concrete(&shape);
        assert_eq!(profile.of(0).weights(), &[0.25, 0.25, 0.5]);
        assert_eq!(profile.of(1).weights(), &[1.]);
        assert!(eq.admissible(&shape, Tolerance::default()));
    }

    #[test]
    fn out_of_range_probabilities_are_inadmissible() {
        let shape = Shape::from(vec![2]);
        let negative = Equilibrium::from(vec![vec![(0, Affine::from(1.5)), (1, Affine::from(-0.5))]]);
        assert!(!negative.admissible(&shape, Tolerance::default()));
        let zero = Equilibrium::from(vec![vec![(0, Affine::from(1.)), (1, Affine::from(0.))]]);
        assert!(!zero.admissible(&shape, Tolerance::default()));
        // p0 = 2·p1 - 0.4 concretizes to p1 = 0.5, p0 = 0.6
        let p1 = Var::from((0, 1));
        let family = Equilibrium::from(vec![vec![
            (0, Affine::new(-0.4, [(p1, 2.)])),
            (1, Affine::from(p1)),
        ]]);
        assert!(family.admissible(&shape, Tolerance::default()));
        let escaping = Equilibrium::from(vec![vec![
            (0, Affine::new(-0.6, [(p1, 1.)])),
            (1, Affine::from(p1)),
        ]]);
        assert!(!escaping.admissible(&shape, Tolerance::default()));
    }

    #[test]
    fn serializes_as_entry_lists() {
        let eq = Equilibrium::pure(&[0]);
        let json = serde_json::to_string(&eq).unwrap();
        assert_eq!(serde_json::from_str::<Equilibrium>(&json).unwrap(), eq);
    }
}
