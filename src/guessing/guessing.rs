use crate::*;

/// The number-guessing game as a [`Sequential`] domain.
///
/// Scores are `[coin, guesser]`: `[0, 1]` on a match, `[1, 0]` once the
/// rounds run out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guessing;

impl Guessing {
    /// Expands the whole game from the root.
    pub fn dag(verbose: bool) -> anyhow::Result<Dag<Self>> {
        Dag::new(Self, Guess::Root, verbose)
    }
    /// Picks open to both players after `key`.
    pub fn picks(&self, key: &Guess) -> Vec<usize> {
        match *key {
            Guess::Root => (0..=HIGHEST).collect(),
            Guess::State { coin, zero, min, .. } => {
                let floor = min.max(coin + 1);
                (!zero)
                    .then_some(0)
                    .into_iter()
                    .chain(floor..HIGHEST)
                    .chain(std::iter::once(HIGHEST))
                    .collect()
            }
        }
    }
}

impl Sequential for Guessing {
    type Key = Guess;
    type Action = usize;

    fn players(&self) -> usize {
        2
    }
    fn spawn(&self, key: &Guess) -> Node<Guess> {
        match key.outcome() {
            Some(Winner::Guesser) => Node::terminal(*key, vec![0., 1.]),
            Some(Winner::Coin) => Node::terminal(*key, vec![1., 0.]),
            None => Node::inner(*key),
        }
    }
    fn actions(&self, node: &Node<Guess>) -> Vec<Vec<usize>> {
        if node.is_terminal() {
            vec![vec![], vec![]]
        } else {
            vec![self.picks(node.key()); 2]
        }
    }
    fn child(&self, node: &Node<Guess>, joint: &[usize]) -> Guess {
        let (coin, guesser) = (joint[0], joint[1]);
        let (guesses, zero, min) = match *node.key() {
            Guess::Root => (0, false, 1),
            Guess::State {
                guesses, zero, min, ..
            } => (guesses + 1, zero, min),
        };
        Guess::State {
            coin,
            guesser,
            guesses,
            zero: zero || coin == 0,
            min: match coin {
                0 => min,
                c if c < HIGHEST => c + 1,
                _ => HIGHEST,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(coin: usize, guesser: usize, guesses: usize, zero: bool, min: usize) -> Guess {
        Guess::State {
            coin,
            guesser,
            guesses,
            zero,
            min,
        }
    }

    #[test]
    fn matches_and_exhaustion_end_the_game() {
        let game = Guessing;
        let matched = game.spawn(&state(3, 3, 0, false, 4));
        assert!(matched.is_terminal());
        assert_eq!(matched.scores(), Some(&[0., 1.][..]));
        let exhausted = game.spawn(&state(3, 4, 2, false, 4));
        assert_eq!(exhausted.scores(), Some(&[1., 0.][..]));
        let open = game.spawn(&state(3, 4, 1, false, 4));
        assert!(!open.is_terminal());
        assert!(open.scores().is_none());
    }

    #[test]
    fn picks_ascend_and_zero_is_spent() {
        let game = Guessing;
        assert_eq!(game.picks(&Guess::Root), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(game.picks(&state(2, 3, 0, false, 3)), vec![0, 3, 4, 5]);
        assert_eq!(game.picks(&state(0, 3, 0, true, 1)), vec![1, 2, 3, 4, 5]);
        assert_eq!(game.picks(&state(5, 3, 0, true, 5)), vec![5]);
    }

    #[test]
    fn children_track_history() {
        let game = Guessing;
        let root = game.spawn(&Guess::Root);
        assert_eq!(game.child(&root, &[0, 2]), state(0, 2, 0, true, 1));
        let node = game.spawn(&state(2, 3, 0, false, 3));
        assert_eq!(game.child(&node, &[4, 1]), state(4, 1, 1, false, 5));
        assert_eq!(game.child(&node, &[0, 1]), state(0, 1, 1, true, 3));
        assert_eq!(game.child(&node, &[5, 1]), state(5, 1, 1, false, 5));
    }

    #[test]
    fn last_round_is_a_matching_game() {
        let mut dag = Guessing::dag(false).unwrap();
        assert!(dag.len() > 36);
        let key = state(2, 3, 1, false, 3);
        assert_eq!(dag.status(&key), Status::Generated);
        dag.set_subscores(&key).unwrap();
        // four picks each: the guesser matches a quarter of the time
        let scores = dag.node(&key).unwrap().scores().unwrap().to_vec();
        assert!((scores[0] - 0.75).abs() < 1e-9);
        assert!((scores[1] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn keys_round_trip_through_json() {
        let key = state(1, 4, 0, true, 2);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(serde_json::from_str::<Guess>(&json).unwrap(), key);
        assert_eq!(serde_json::from_str::<Guess>("\"Root\"").unwrap(), Guess::Root);
    }
}
