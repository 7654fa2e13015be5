use super::at_least;
use crate::*;

/// Everyone scores only when all pick the same action; each player has a
/// favourite. `n` players with `n` actions each. Coordinating on player
/// `i`'s favourite pays `i` `n` and everyone else 1.
pub fn battle_of_genders(n: usize) -> anyhow::Result<Payoffs> {
    at_least("battle of genders", n, 1)?;
    Payoffs::from_fn(vec![n; n], |a| {
        if a.iter().all(|x| *x == a[0]) {
            (0..n)
                .map(|p| (if p == a[0] { n } else { 1 }) as Utility)
                .collect()
        } else {
            vec![0.; n]
        }
    })
}

/// `n` players of `m` types, each picking one of `m` actions. A player earns
/// one point per other player picking the same action, doubled when the
/// action matches the player's type (`player / m`).
pub fn detente_of_genders(n: usize, m: usize) -> anyhow::Result<Payoffs> {
    at_least("detente of genders", n, 1)?;
    anyhow::ensure!(m > 0, "detente of genders needs at least one type");
    Payoffs::from_fn(vec![m; n], |a| {
        let mut counts = vec![0usize; m];
        a.iter().for_each(|x| counts[*x] += 1);
        (0..n)
            .map(|p| {
                let score = (counts[a[p]] - 1) as Utility;
                if a[p] == p / m { 2. * score } else { score }
            })
            .collect()
    })
}

/// Multi-player high-low on two actions. All picking 0 pays 3 each, all
/// picking 1 pays 1 each, anything else pays nothing.
pub fn dunderheads(n: usize) -> anyhow::Result<Payoffs> {
    at_least("dunderheads", n, 2)?;
    Payoffs::from_fn(vec![2; n], |a| {
        let payoff = match (a.iter().all(|x| *x == 0), a.iter().all(|x| *x == 1)) {
            (true, _) => 3.,
            (_, true) => 1.,
            _ => 0.,
        };
        vec![payoff; n]
    })
}

/// Action 0 chickens out, action 1 plays hawk. A lone hawk takes 5 while
/// the chickens lose 1; several hawks each lose 10.
pub fn chicken(n: usize) -> anyhow::Result<Payoffs> {
    at_least("chicken", n, 2)?;
    Payoffs::from_fn(vec![2; n], |a| {
        let hawks = a.iter().filter(|x| **x == 1).count();
        a.iter()
            .map(|x| match (hawks, *x) {
                (1, 1) => 5.,
                (1, _) => -1.,
                (0, _) => 0.,
                (_, 1) => -10.,
                (_, _) => 0.,
            })
            .collect()
    })
}

/// Action 0 chases rabbits for a sure 1. Action 1 hunts the stag, which
/// needs at least `m` hunters and is worth `4n` split among them.
pub fn stag_hunt(n: usize, m: usize) -> anyhow::Result<Payoffs> {
    at_least("stag hunt", n, 2)?;
    Payoffs::from_fn(vec![2; n], |a| {
        let hunters = a.iter().filter(|x| **x == 1).count();
        a.iter()
            .map(|x| match *x {
                0 => 1.,
                _ if hunters >= m => 4. * n as Utility / hunters as Utility,
                _ => 0.,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_rewards_coordination() {
        let payoffs = battle_of_genders(3).unwrap();
        assert_eq!(payoffs.shape().dims(), &[3, 3, 3]);
        assert_eq!(payoffs.at(&[1, 1, 1]), &[1., 3., 1.]);
        assert_eq!(payoffs.at(&[1, 1, 0]), &[0., 0., 0.]);
    }

    #[test]
    fn detente_doubles_own_type() {
        let payoffs = detente_of_genders(4, 2).unwrap();
        // players 0 and 1 are type 0, players 2 and 3 type 1
        assert_eq!(payoffs.at(&[0, 0, 0, 1]), &[4., 4., 2., 0.]);
        assert_eq!(payoffs.at(&[1, 1, 1, 1]), &[3., 3., 6., 6.]);
    }

    #[test]
    fn dunderheads_two_pure_equilibria() {
        let game = Game::from(dunderheads(3).unwrap());
        assert_eq!(game.find_pure(), vec![vec![0, 0, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn chicken_hawks() {
        let payoffs = chicken(3).unwrap();
        assert_eq!(payoffs.at(&[0, 1, 0]), &[-1., 5., -1.]);
        assert_eq!(payoffs.at(&[1, 1, 0]), &[-10., -10., 0.]);
        assert_eq!(payoffs.at(&[0, 0, 0]), &[0., 0., 0.]);
    }

    #[test]
    fn stag_needs_enough_hunters() {
        let payoffs = stag_hunt(3, 2).unwrap();
        assert_eq!(payoffs.at(&[1, 0, 0]), &[0., 1., 1.]);
        assert_eq!(payoffs.at(&[1, 1, 0]), &[6., 6., 1.]);
        assert_eq!(payoffs.at(&[1, 1, 1]), &[4., 4., 4.]);
    }
}
