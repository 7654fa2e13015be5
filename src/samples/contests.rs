use super::at_least;
use super::exactly;
use crate::*;

/// `n` players each pick a number below `n`. Player `i` wins, scoring
/// `n − 1`, when the picks sum to `i` modulo `n`; everyone else scores −1.
pub fn matching_pennies(n: usize) -> anyhow::Result<Payoffs> {
    at_least("matching pennies", n, 2)?;
    Payoffs::from_fn(vec![n; n], |a| {
        let winner = a.iter().sum::<usize>() % n;
        (0..n)
            .map(|p| if p == winner { (n - 1) as Utility } else { -1. })
            .collect()
    })
}

/// `n` players pick from `0..m`. Whoever picks the lowest number nobody
/// else picked scores 1.
pub fn how_low_dare_you_go(n: usize, m: usize) -> anyhow::Result<Payoffs> {
    at_least("how low dare you go", n, 2)?;
    anyhow::ensure!(m > 0, "how low dare you go needs at least one number");
    Payoffs::from_fn(vec![m; n], |a| {
        let mut counts = vec![0usize; m];
        a.iter().for_each(|x| counts[*x] += 1);
        let lowest = counts.iter().position(|c| *c == 1);
        a.iter()
            .map(|x| (Some(*x) == lowest) as usize as Utility)
            .collect()
    })
}

/// `n` players bid from `0..=m` and all pay their bids. The highest bidders
/// split a prize of `1.5m` between two players, `2m` among more.
pub fn all_pay_auction(n: usize, m: usize) -> anyhow::Result<Payoffs> {
    at_least("all-pay auction", n, 2)?;
    let prize = match n {
        2 => 1.5 * m as Utility,
        _ => 2. * m as Utility,
    };
    Payoffs::from_fn(vec![m + 1; n], |a| {
        let top = a.iter().copied().max().unwrap_or_default();
        let winners = a.iter().filter(|x| **x == top).count() as Utility;
        a.iter()
            .map(|x| {
                if *x == top {
                    prize / winners - *x as Utility
                } else {
                    -(*x as Utility)
                }
            })
            .collect()
    })
}

/// A 3×3 game with quadratic costs:
/// `u₀ = a + ab − (2b + a²)` and `u₁ = b + ab − (2a + b²)`.
pub fn negadd(n: usize) -> anyhow::Result<Payoffs> {
    exactly("negadd", n, 2)?;
    Payoffs::from_fn(vec![3, 3], |x| {
        let (a, b) = (x[0] as Utility, x[1] as Utility);
        vec![a + a * b - (2. * b + a * a), b + a * b - (2. * a + b * b)]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pennies_pays_the_residue() {
        let payoffs = matching_pennies(3).unwrap();
        assert_eq!(payoffs.at(&[1, 2, 1]), &[-1., 2., -1.]);
        let two = matching_pennies(2).unwrap();
        assert_eq!(two.at(&[0, 0]), &[1., -1.]);
        assert_eq!(two.at(&[1, 0]), &[-1., 1.]);
    }

    #[test]
    fn two_player_pennies_mixes_evenly() {
        let game = Game::from(matching_pennies(2).unwrap());
        let equilibria = game.find_all_equilibria().collect::<Vec<_>>();
        assert_eq!(equilibria.len(), 1);
        let profile = equilibria[0].concrete(game.shape());
        assert_eq!(profile, Profile::from(vec![vec![0.5, 0.5], vec![0.5, 0.5]]));
    }

    #[test]
    fn lowest_unique_pick_wins() {
        let payoffs = how_low_dare_you_go(3, 4).unwrap();
        assert_eq!(payoffs.at(&[0, 0, 1]), &[0., 0., 1.]);
        assert_eq!(payoffs.at(&[2, 0, 3]), &[0., 1., 0.]);
        assert_eq!(payoffs.at(&[1, 1, 1]), &[0., 0., 0.]);
    }

    #[test]
    fn all_pay_splits_the_prize() {
        let payoffs = all_pay_auction(2, 2).unwrap();
        assert_eq!(payoffs.shape().dims(), &[3, 3]);
        assert_eq!(payoffs.at(&[2, 1]), &[1., -1.]);
        assert_eq!(payoffs.at(&[1, 1]), &[0.5, 0.5]);
        let three = all_pay_auction(3, 1).unwrap();
        assert_eq!(three.at(&[1, 1, 0]), &[0., 0., 0.]);
    }

    #[test]
    fn negadd_quadratics() {
        let payoffs = negadd(2).unwrap();
        assert_eq!(payoffs.at(&[2, 1]), &[-2., -2.]);
        assert_eq!(payoffs.at(&[0, 2]), &[-4., -2.]);
        assert!(negadd(3).is_err());
    }
}
