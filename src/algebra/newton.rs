use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Multi-start Newton iteration for multilinear indifference systems.
///
/// Systems where three or more players mix are polynomial. Each start is a
/// point on the product of probability simplices: the first is uniform, the
/// rest are drawn from a seeded generator so that repeated runs agree.
///
/// A converged point with a nonsingular Jacobian is an isolated root and is
/// returned as a concrete solution, once per root. A singular Jacobian means
/// the point sits on a continuum. The linearization there is tested at
/// random points, first over all unknowns and then over one player's
/// unknowns at a time with the rest pinned; each linearization that holds
/// exactly is one affine family, returned once as a parametric solution.
/// Singular points on curved families are dropped.
#[derive(Debug, Clone, Copy)]
pub struct Newton {
    pub starts: usize,
    pub iterations: usize,
    pub tolerance: f64,
    pub seed: u64,
}

impl Default for Newton {
    fn default() -> Self {
        Self {
            starts: NEWTON_STARTS,
            iterations: NEWTON_ITERATIONS,
            tolerance: NEWTON_TOLERANCE,
            seed: NEWTON_SEED,
        }
    }
}

const DIVERGENCE: f64 = 1e6;
/// Random points a candidate family must vanish at.
const CHECKS: usize = 4;
/// Half-width of the box around the root that family points are drawn from.
const REACH: f64 = 0.25;

impl Solve for Newton {
    fn solve(&self, system: &System) -> anyhow::Result<Vec<Solution>> {
        anyhow::ensure!(
            system.equations().len() == system.n(),
            "newton needs a square system, got {} equations in {} unknowns",
            system.equations().len(),
            system.n()
        );
        if system.n() == 0 {
            return Ok(vec![Solution::new()]);
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut checks = SmallRng::seed_from_u64(self.seed.wrapping_add(1));
        let mut roots = Vec::<Vec<f64>>::new();
        let mut families = Vec::<Solution>::new();
        for start in 0..self.starts {
            let x = if start == 0 {
                self.uniform(system)
            } else {
                self.scatter(system, &mut rng)
            };
            let Some(root) = self.descend(system, x) else {
                continue;
            };
            if Self::singular(system, &root) {
                for family in self.families(system, &root, &mut checks) {
                    if !families.iter().any(|f| same(f, &family)) {
                        log::trace!("newton family through {:?} from start {}", root, start);
                        families.push(family);
                    }
                }
            } else if roots.iter().all(|r| distance(r, &root) > WIGGLE) {
                log::trace!("newton root {:?} from start {}", root, start);
                roots.push(root);
            }
        }
        Ok(roots
            .into_iter()
            .map(|root| {
                system
                    .vars()
                    .iter()
                    .zip(root)
                    .map(|(v, x)| (*v, Affine::from(x)))
                    .collect()
            })
            .chain(families)
            .collect())
    }
}

impl Newton {
    fn uniform(&self, system: &System) -> Vec<f64> {
        system
            .sizes()
            .iter()
            .filter(|k| **k > 0)
            .flat_map(|k| std::iter::repeat_n(1. / *k as f64, *k))
            .collect()
    }
    fn scatter(&self, system: &System, rng: &mut SmallRng) -> Vec<f64> {
        system
            .sizes()
            .iter()
            .filter(|k| **k > 0)
            .flat_map(|k| {
                let weights = (0..*k)
                    .map(|_| rng.random_range(0.05..1.))
                    .collect::<Vec<f64>>();
                let total = weights.iter().sum::<f64>();
                weights.into_iter().map(move |w| w / total)
            })
            .collect()
    }
    fn scale(system: &System) -> f64 {
        system
            .equations()
            .iter()
            .flat_map(|e| e.monomials().map(|(_, c)| c.abs()))
            .fold(1f64, f64::max)
    }
    /// Iterates from `x` until the residual vanishes and the steps stall, or
    /// the Jacobian turns singular next to a root.
    fn descend(&self, system: &System, mut x: Vec<f64>) -> Option<Vec<f64>> {
        let scale = Self::scale(system);
        let loose = self.tolerance.sqrt() * scale;
        for _ in 0..self.iterations {
            let residual = system.residual(&x);
            let rhs = residual.iter().map(|r| -r).collect::<Vec<_>>();
            let Some(step) = Reduced::from((system.jacobian(&x), rhs)).unique() else {
                return (norm(&residual) <= loose).then_some(x);
            };
            if norm(&residual) <= self.tolerance * scale && norm(&step) <= self.tolerance {
                return Some(x);
            }
            x.iter_mut().zip(step).for_each(|(x, dx)| *x += dx);
            if x.iter().any(|x| !x.is_finite() || x.abs() > DIVERGENCE) {
                return None;
            }
        }
        (norm(&system.residual(&x)) <= loose).then_some(x)
    }
    fn singular(system: &System, x: &[f64]) -> bool {
        let jacobian = system.jacobian(x);
        let zeros = vec![0.; jacobian.len()];
        Reduced::from((jacobian, zeros)).rank() < system.n()
    }
    /// Affine families of roots through the singular root `x`.
    fn families(&self, system: &System, x: &[f64], rng: &mut SmallRng) -> Vec<Solution> {
        if let Some(family) = self.family(system, x, None, rng) {
            return vec![family];
        }
        system
            .vars()
            .iter()
            .map(|v| v.player)
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .filter_map(|player| self.family(system, x, Some(player), rng))
            .collect()
    }
    /// The linearization at `x`, with every unknown outside `player` pinned
    /// when one is given, if it vanishes along its whole solution set.
    fn family(
        &self,
        system: &System,
        x: &[f64],
        player: Option<usize>,
        rng: &mut SmallRng,
    ) -> Option<Solution> {
        let vars = system.vars();
        let mut rows = system.jacobian(x);
        let mut rhs = rows
            .iter()
            .map(|row| row.iter().zip(x).map(|(a, x)| a * x).sum::<f64>())
            .collect::<Vec<_>>();
        for (i, var) in vars.iter().enumerate() {
            if player.is_some_and(|p| p != var.player) {
                let mut pin = vec![0.; vars.len()];
                pin[i] = 1.;
                rows.push(pin);
                rhs.push(x[i]);
            }
        }
        let reduced = Reduced::from((rows, rhs));
        if reduced.inconsistent || reduced.free().next().is_none() {
            return None;
        }
        let family = reduced.solution(vars);
        let limit = self.tolerance.sqrt() * Self::scale(system);
        let exact = (0..CHECKS).all(|_| {
            let assignment = reduced
                .free()
                .map(|f| (vars[f], x[f] + rng.random_range(-REACH..REACH)))
                .collect::<std::collections::BTreeMap<Var, f64>>();
            let point = vars
                .iter()
                .map(|v| family[v].eval(|u| assignment.get(&u).copied().unwrap_or_default()))
                .collect::<Vec<_>>();
            norm(&system.residual(&point)) <= limit
        });
        exact.then_some(family)
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().fold(0f64, |m, x| m.max(x.abs()))
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .fold(0f64, |m, (x, y)| m.max((x - y).abs()))
}

fn same(a: &Solution, b: &Solution) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(v, e)| b.get(v).is_some_and(|other| e.is_close(other, WIGGLE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_mixing(n: usize) -> Support {
        Support::from(vec![vec![0, 1]; n])
    }

    /// Everyone earns `high` if all pick action 0, `low` if all pick action 1.
    fn coordination(high: Utility, low: Utility) -> Payoffs {
        Payoffs::from_fn(vec![2, 2, 2], |a| {
            let payoff = match (a[0], a[1], a[2]) {
                (0, 0, 0) => high,
                (1, 1, 1) => low,
                _ => 0.,
            };
            vec![payoff; 3]
        })
        .unwrap()
    }

    #[test]
    fn symmetric_coordination_mixes_evenly() {
        let system = System::indifference(&coordination(1., 1.), &all_mixing(3));
        let solutions = Newton::default().solve(&system).unwrap();
        assert!(solutions.iter().any(|s| {
            s.values()
                .all(|v| (v.value().unwrap() - 0.5).abs() < 1e-9)
        }));
    }

    #[test]
    fn finds_irrational_root() {
        // 2q² = (1 - q)² at q = √2 - 1
        let q = 2f64.sqrt() - 1.;
        let system = System::indifference(&coordination(2., 1.), &all_mixing(3));
        let solutions = Newton::default().solve(&system).unwrap();
        assert!(solutions.iter().any(|s| {
            (0..3).all(|p| (s[&Var::from((p, 0))].value().unwrap() - q).abs() < 1e-9)
        }));
    }

    #[test]
    fn roots_satisfy_the_system() {
        let system = System::indifference(&coordination(3., 1.), &all_mixing(3));
        for solution in Newton::default().solve(&system).unwrap() {
            let x = system
                .vars()
                .iter()
                .map(|v| solution[v].value().unwrap())
                .collect::<Vec<_>>();
            assert!(norm(&system.residual(&x)) < 1e-5);
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let system = System::indifference(&coordination(2., 1.), &all_mixing(3));
        let a = Newton::default().solve(&system).unwrap();
        let b = Newton::default().solve(&system).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn continuum_returns_one_family() {
        // player 0 is free once both opponents play uniformly
        let payoffs = matching_pennies(3).unwrap();
        let support = Support::from(vec![vec![0, 1], vec![0, 1, 2], vec![0, 1, 2]]);
        let system = System::indifference(&payoffs, &support);
        let solutions = Newton::default().solve(&system).unwrap();
        assert_eq!(solutions.len(), 1);
        let family = &solutions[0];
        let free = Var::from((0, 1));
        assert_eq!(family[&free], Affine::from(free));
        assert!((family[&Var::from((0, 0))].eval(|_| 0.25) - 0.75).abs() < 1e-9);
        for p in 1..3 {
            for a in 0..3 {
                let value = family[&Var::from((p, a))].value().unwrap();
                assert!((value - 1. / 3.).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn crossing_families_are_reported_once_each() {
        // any two uniform players leave the third free
        let payoffs = matching_pennies(3).unwrap();
        let system = System::indifference(&payoffs, &Support::from(vec![vec![0, 1, 2]; 3]));
        let solutions = Newton::default().solve(&system).unwrap();
        assert!(solutions.len() <= 3);
        assert!(solutions.iter().all(|s| s.values().any(|e| !e.is_constant())));
        for (i, a) in solutions.iter().enumerate() {
            for b in solutions.iter().skip(i + 1) {
                assert!(!same(a, b));
            }
        }
    }

    #[test]
    fn pure_support_solves_trivially() {
        let support = Support::from(vec![vec![0]; 3]);
        let system = System::indifference(&coordination(1., 1.), &support);
        assert_eq!(Newton::default().solve(&system).unwrap(), vec![Solution::new()]);
    }
}
