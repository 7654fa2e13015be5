use super::exactly;
use crate::*;

/// Cards dealt from a deck of four kings and four queens.
const CARDS: usize = 8;
const KINGS: u32 = 4;
/// Rounds the payoffs are scaled to.
const ROUNDS: Utility = 14.;

/// Stripped-down poker between a dealer and a student.
///
/// The dealer holds the first card and either bets (action 0) or folds
/// (action 1). The student sees `revealed` of the remaining cards and calls
/// when at least `s` of them are kings, one column per threshold `s` from
/// 0 up to `min(revealed + 1, 4)`. A dealer king wins 2 when called and 1
/// otherwise. A dealer queen loses 1 on a fold, loses 2 on a called bet,
/// and wins 1 on a bluff. Payoffs are the dealer's expected winnings over
/// 14 rounds, and the student receives the negation.
pub fn stripped_poker(n: usize, revealed: usize) -> anyhow::Result<Payoffs> {
    exactly("stripped poker", n, 2)?;
    anyhow::ensure!(
        revealed < CARDS,
        "stripped poker reveals at most {} cards, got {}",
        CARDS - 1,
        revealed
    );
    let thresholds = (revealed + 2).min(5);
    let mut matrix = vec![vec![0.; thresholds]; 2];
    let mut deals = 0;
    // every arrangement of kings among positions is equally likely
    for deal in (0u32..1 << CARDS).filter(|d| d.count_ones() == KINGS) {
        deals += 1;
        let king = |i: usize| deal & (1 << i) != 0;
        let kings = (1..=revealed).filter(|i| king(*i)).count();
        for (dealer, row) in matrix.iter_mut().enumerate() {
            for (threshold, cell) in row.iter_mut().enumerate() {
                let calls = kings >= threshold;
                *cell += match (king(0), dealer, calls) {
                    (true, _, true) => 2.,
                    (true, _, false) => 1.,
                    (false, 1, _) => -1.,
                    (false, _, true) => -2.,
                    (false, _, false) => 1.,
                };
            }
        }
    }
    matrix
        .iter_mut()
        .flatten()
        .for_each(|cell| *cell *= ROUNDS / deals as Utility);
    Payoffs::zero_sum(&matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_student() {
        let payoffs = stripped_poker(2, 0).unwrap();
        assert_eq!(payoffs.shape().dims(), &[2, 2]);
        assert_eq!(payoffs.at(&[0, 0]), &[0., -0.]);
        assert_eq!(payoffs.at(&[0, 1]), &[14., -14.]);
        assert_eq!(payoffs.at(&[1, 0]), &[7., -7.]);
        assert_eq!(payoffs.at(&[1, 1]), &[0., -0.]);
    }

    #[test]
    fn thresholds_cap_at_four() {
        assert_eq!(stripped_poker(2, 1).unwrap().shape().dims(), &[2, 3]);
        assert_eq!(stripped_poker(2, 7).unwrap().shape().dims(), &[2, 5]);
        assert!(stripped_poker(2, 8).is_err());
        assert!(stripped_poker(3, 1).is_err());
    }

    #[test]
    fn blind_student_mixes() {
        let game = Game::from(stripped_poker(2, 0).unwrap());
        let equilibria = game.find_all_equilibria().collect::<Vec<_>>();
        assert_eq!(equilibria.len(), 1);
        let values = equilibria[0].payoffs(&game);
        assert!((values[0] - 14. / 3.).abs() < 1e-9);
    }
}
