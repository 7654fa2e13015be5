use crate::*;
use std::collections::BTreeMap;

/// The indifference system of a candidate support.
///
/// Unknowns are the probabilities of every supported action of every mixing
/// player; players with a single supported action play it with certainty and
/// contribute no unknowns. For each mixing player the system holds
///
/// - Σ own probabilities − 1 = 0
/// - E[a₀] − E[aᵢ] = 0 for each further supported action aᵢ
///
/// where E[a] is the expected payoff of playing `a` against the other
/// players' supported actions. The system is square, and each equation's
/// degree is the number of other mixing players.
#[derive(Debug, Clone)]
pub struct System {
    vars: Vec<Var>,
    equations: Vec<Polynomial>,
    sizes: Vec<usize>,
}

impl System {
    /// Builds the indifference system of a support.
    pub fn indifference(payoffs: &Payoffs, support: &Support) -> Self {
        let vars = support
            .mixers()
            .flat_map(|p| support.of(p).iter().map(move |a| Var::from((p, *a))))
            .collect::<Vec<_>>();
        let lookup = vars
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect::<BTreeMap<Var, usize>>();
        let mut equations = Vec::with_capacity(vars.len());
        for player in support.mixers() {
            let mut sum = Polynomial::default();
            for action in support.of(player) {
                sum.add(1., vec![lookup[&Var::from((player, *action))]]);
            }
            sum.add(-1., vec![]);
            equations.push(sum);
            let Some((reference, others)) = support.of(player).split_first() else {
                continue;
            };
            for action in others {
                let mut indifference = Polynomial::default();
                Self::expectation(payoffs, support, &lookup, player, *reference, 1., &mut indifference);
                Self::expectation(payoffs, support, &lookup, player, *action, -1., &mut indifference);
                equations.push(indifference);
            }
        }
        let sizes = (0..support.n())
            .map(|p| match support.of(p).len() {
                1 => 0,
                k => k,
            })
            .collect();
        Self {
            vars,
            equations,
            sizes,
        }
    }
    /// Adds `sign · E[action]` for `player` into `target`.
    fn expectation(
        payoffs: &Payoffs,
        support: &Support,
        lookup: &BTreeMap<Var, usize>,
        player: usize,
        action: usize,
        sign: f64,
        target: &mut Polynomial,
    ) {
        let lists = (0..support.n())
            .map(|p| if p == player { vec![action] } else { support.of(p).to_vec() })
            .collect::<Vec<_>>();
        for picks in Indices::from(lists.iter().map(Vec::len).collect::<Vec<_>>()) {
            let profile = picks
                .iter()
                .enumerate()
                .map(|(p, i)| lists[p][*i])
                .collect::<Vec<_>>();
            let unknowns = profile
                .iter()
                .enumerate()
                .filter(|(p, _)| *p != player)
                .filter_map(|(p, a)| lookup.get(&Var::from((p, *a))).copied())
                .collect::<Vec<_>>();
            target.add(sign * payoffs.get(&profile, player), unknowns);
        }
    }
}

impl System {
    /// Unknowns in column order.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }
    /// Equations, each `= 0`.
    pub fn equations(&self) -> &[Polynomial] {
        &self.equations
    }
    /// Number of unknowns.
    pub fn n(&self) -> usize {
        self.vars.len()
    }
    /// Unknowns owned by each player (zero for non-mixers).
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
    /// Highest equation degree.
    pub fn degree(&self) -> usize {
        self.equations
            .iter()
            .map(Polynomial::degree)
            .max()
            .unwrap_or_default()
    }
    /// Residual vector at a point.
    pub fn residual(&self, x: &[f64]) -> Vec<f64> {
        self.equations.iter().map(|e| e.eval(x)).collect()
    }
    /// Jacobian at a point, one row per equation.
    pub fn jacobian(&self, x: &[f64]) -> Vec<Vec<f64>> {
        self.equations
            .iter()
            .map(|e| e.gradient(x, self.n()))
            .collect()
    }
}
