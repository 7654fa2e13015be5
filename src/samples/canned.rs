use crate::*;

/// A known profile of a sample game, for checking against `is_nash`.
///
/// Battle of genders has each player on their own favourite, which is an
/// equilibrium from three players up since no single deviation achieves
/// coordination. Dunderheads has everyone mixing so that the likelier match
/// on the low action offsets its lower payoff. Reducible plays the surviving
/// pure profile. Matching pennies has the first two players mixing evenly,
/// which leaves every other player indifferent.
pub fn canned(sample: Sample, n: usize) -> anyhow::Result<Profile> {
    match sample {
        Sample::BattleOfGenders => Ok(Profile::from(
            (0..n).map(|p| Strategy::pure(p, n)).collect::<Vec<_>>(),
        )),
        Sample::Dunderheads => {
            anyhow::ensure!(n >= 2, "dunderheads needs at least 2 players");
            let root = 3f64.powf(1. / (n - 1) as f64);
            let mix = vec![1. / (root + 1.), root / (root + 1.)];
            Ok(Profile::from(vec![mix; n]))
        }
        Sample::Reducible => {
            anyhow::ensure!(n >= 2, "reducible needs at least 2 players");
            Ok(Profile::from(
                [Strategy::pure(0, 3), Strategy::pure(0, 3)]
                    .into_iter()
                    .chain(std::iter::repeat_n(Strategy::pure(0, 2), n - 2))
                    .collect::<Vec<_>>(),
            ))
        }
        Sample::MatchingPennies => {
            anyhow::ensure!(n >= 2, "matching pennies needs at least 2 players");
            Ok(Profile::from(
                [Strategy::uniform(n), Strategy::uniform(n)]
                    .into_iter()
                    .chain(std::iter::repeat_n(Strategy::pure(0, n), n - 2))
                    .collect::<Vec<_>>(),
            ))
        }
        other => Err(anyhow::anyhow!("no canned profile for {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! canned_is_nash {
        ($($sample:ident: $n:literal),* $(,)?) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<canned_ $sample:snake _ $n _is_nash>]() {
                        let sample = Sample::$sample;
                        let game = sample.game($n, None).unwrap();
                        let profile = canned(sample, $n).unwrap();
                        assert!(game.is_nash(&profile).unwrap());
                    }
                )*
            }
        };
    }

    canned_is_nash! {
        BattleOfGenders: 3,
        Dunderheads: 2,
        Dunderheads: 3,
        Reducible: 2,
        Reducible: 4,
        MatchingPennies: 2,
        MatchingPennies: 3,
    }

    #[test]
    fn two_player_battle_profile_is_not_nash() {
        let game = Sample::BattleOfGenders.game(2, None).unwrap();
        let profile = canned(Sample::BattleOfGenders, 2).unwrap();
        assert!(!game.is_nash(&profile).unwrap());
    }

    #[test]
    fn other_samples_have_none() {
        assert!(canned(Sample::Chicken, 2).is_err());
    }
}
