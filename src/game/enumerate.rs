use crate::*;

/// Support enumeration.
///
/// Every combination of nonempty per-player action subsets is a candidate
/// support. Pure supports are checked directly. Mixed supports go through
/// their indifference system; each solution that keeps every probability in
/// (0, 1] and leaves no profitable pure deviation is an equilibrium.
impl Game {
    /// Lazily yields every equilibrium found with the default solver.
    pub fn find_all_equilibria(&self) -> impl Iterator<Item = Equilibrium> + '_ {
        self.find_all_equilibria_with(Algebraic::default())
    }

    /// Lazily yields every equilibrium found with `solver`.
    pub fn find_all_equilibria_with<'a, S>(&'a self, solver: S) -> impl Iterator<Item = Equilibrium> + 'a
    where
        S: Solve + 'a,
    {
        Supports::from(self.shape()).flat_map(move |support| self.candidates(&solver, &support))
    }

    /// Equilibria whose support is exactly `support`.
    pub fn find_support_equilibria(&self, support: &Support) -> anyhow::Result<Vec<Equilibrium>> {
        support.validate(self.shape())?;
        Ok(self.candidates(&Algebraic::default(), support))
    }

    /// Every equilibrium, solving supports on the rayon pool.
    /// Output order matches [`Game::find_all_equilibria`].
    #[cfg(feature = "parallel")]
    pub fn par_find_all_equilibria(&self) -> Vec<Equilibrium> {
        use rayon::prelude::*;
        let solver = Algebraic::default();
        Supports::from(self.shape())
            .collect::<Vec<_>>()
            .par_iter()
            .map(|support| self.candidates(&solver, support))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn candidates<S>(&self, solver: &S, support: &Support) -> Vec<Equilibrium>
    where
        S: Solve + ?Sized,
    {
        if let Some(actions) = support.pure() {
            if self.is_dominated(&Profile::pure(&actions, self.shape())) {
                return vec![];
            }
            return vec![Equilibrium::pure(&actions)];
        }
        let system = System::indifference(self.payoffs(), support);
        let solutions = match solver.solve(&system) {
            Ok(solutions) => solutions,
            Err(e) => {
                log::trace!("no solution on support {}: {}", support, e);
                return vec![];
            }
        };
        solutions
            .iter()
            .map(|solution| Equilibrium::from((support, solution)))
            .filter(|eq| eq.admissible(self.shape(), self.tolerance()))
            .filter(|eq| !self.is_dominated(&eq.concrete(self.shape())))
            .inspect(|eq| log::debug!("equilibrium on support {}: {}", support, eq))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pennies() -> Game {
        Game::from(Payoffs::zero_sum(&[vec![1., -1.], vec![-1., 1.]]).unwrap())
    }

    fn battle() -> Game {
        Game::from(Payoffs::new(vec![2, 2], vec![2., 1., 0., 0., 0., 0., 1., 2.]).unwrap())
    }

    fn close(eq: &Equilibrium, player: usize, expected: &[Probability]) -> bool {
        eq.of(player).len() == expected.len()
            && eq
                .of(player)
                .iter()
                .zip(expected)
                .all(|((_, p), q)| p.value().is_some_and(|p| (p - q).abs() < 1e-9))
    }

    #[test]
    fn pennies_mixes_evenly() {
        let equilibria = pennies().find_all_equilibria().collect::<Vec<_>>();
        assert_eq!(equilibria.len(), 1);
        assert!(close(&equilibria[0], 0, &[0.5, 0.5]));
        assert!(close(&equilibria[0], 1, &[0.5, 0.5]));
    }

    #[test]
    fn battle_has_two_pure_and_one_mixed() {
        let game = battle();
        let equilibria = game.find_all_equilibria().collect::<Vec<_>>();
        assert_eq!(equilibria.len(), 3);
        let pure = equilibria
            .iter()
            .filter_map(|eq| eq.support().pure())
            .collect::<Vec<_>>();
        assert_eq!(pure, game.find_pure());
        let mixed = equilibria
            .iter()
            .find(|eq| eq.support().pure().is_none())
            .unwrap();
        assert!(close(mixed, 0, &[2. / 3., 1. / 3.]));
        assert!(close(mixed, 1, &[1. / 3., 2. / 3.]));
    }

    #[test]
    fn restricted_support_search() {
        let game = battle();
        let full = Support::from(vec![vec![0, 1], vec![0, 1]]);
        assert_eq!(game.find_support_equilibria(&full).unwrap().len(), 1);
        let lopsided = Support::from(vec![vec![0], vec![0, 1]]);
        assert!(game.find_support_equilibria(&lopsided).unwrap().is_empty());
        let invalid = Support::from(vec![vec![1, 0], vec![0]]);
        assert!(game.find_support_equilibria(&invalid).is_err());
    }

    #[test]
    fn indifferent_player_yields_family() {
        // column player earns nothing anywhere; row player strictly prefers row 0
        let game = Game::from(Payoffs::new(vec![2, 2], vec![1., 0., 1., 0., 0., 0., 0., 0.]).unwrap());
        let support = Support::from(vec![vec![0], vec![0, 1]]);
        let equilibria = game.find_support_equilibria(&support).unwrap();
        assert_eq!(equilibria.len(), 1);
        assert!(equilibria[0].is_parametric());
        let profile = equilibria[0].concrete(game.shape());
        assert_eq!(profile.of(1).weights(), &[0.5, 0.5]);
        assert!(game.is_nash(&profile).unwrap());
    }

    #[test]
    fn three_player_continuum_is_one_equilibrium() {
        let game = Game::from(matching_pennies(3).unwrap());
        let support = Support::from(vec![vec![0, 1], vec![0, 1, 2], vec![0, 1, 2]]);
        let equilibria = game.find_support_equilibria(&support).unwrap();
        assert_eq!(equilibria.len(), 1);
        assert!(equilibria[0].is_parametric());
        let profile = equilibria[0].concrete(game.shape());
        let weights = profile.of(0).weights();
        assert!(weights.iter().zip([0.5, 0.5, 0.]).all(|(w, x)| (w - x).abs() < 1e-9));
        assert!(game.is_nash(&profile).unwrap());
        let full = game
            .find_support_equilibria(&Support::from(vec![vec![0, 1, 2]; 3]))
            .unwrap();
        assert!(full.len() <= 3);
        for eq in full {
            assert!(eq.is_parametric());
            assert!(game.is_nash(&eq.concrete(game.shape())).unwrap());
        }
    }

    #[test]
    fn three_player_interior_equilibrium() {
        // everyone earns 1 when all three coordinate on either action
        let game = Game::from(
            Payoffs::from_fn(vec![2, 2, 2], |a| {
                vec![(a[0] == a[1] && a[1] == a[2]) as usize as Utility; 3]
            })
            .unwrap(),
        );
        let support = Support::from(vec![vec![0, 1]; 3]);
        let equilibria = game.find_support_equilibria(&support).unwrap();
        assert!(equilibria.iter().any(|eq| (0..3).all(|p| close(eq, p, &[0.5, 0.5]))));
    }

    #[test]
    fn equilibria_verify_as_nash() {
        for _ in 0..8 {
            let game = Game::from(Payoffs::random());
            for eq in game.find_all_equilibria() {
                let profile = eq.concrete(game.shape());
                assert!(game.is_nash(&profile).unwrap(), "{} in\n{}", eq, game);
            }
        }
    }

    #[test]
    fn pure_search_agrees_with_enumeration() {
        for _ in 0..8 {
            let game = Game::from(Payoffs::random());
            let enumerated = game
                .find_all_equilibria()
                .filter_map(|eq| eq.support().pure())
                .collect::<Vec<_>>();
            for pure in game.find_pure() {
                assert!(enumerated.contains(&pure));
            }
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let game = battle();
        let sequential = game.find_all_equilibria().collect::<Vec<_>>();
        assert_eq!(game.par_find_all_equilibria(), sequential);
    }
}
