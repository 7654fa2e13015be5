/// Highest number either player may pick.
pub const HIGHEST: usize = 5;
/// Unmatched rounds after which the coin wins.
pub const ROUNDS: usize = 3;

/// State of the guessing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Guess {
    Root,
    State {
        /// the coin's latest pick
        coin: usize,
        /// the guesser's latest pick
        guesser: usize,
        /// completed rounds before the latest, counting from zero
        guesses: usize,
        /// whether zero has been picked
        zero: bool,
        /// smallest nonzero pick still allowed
        min: usize,
    },
}

/// Who takes the game at a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Coin,
    Guesser,
}

impl Guess {
    /// The winner, if the game is over here.
    pub fn outcome(&self) -> Option<Winner> {
        match *self {
            Guess::Root => None,
            Guess::State { coin, guesser, .. } if coin == guesser => Some(Winner::Guesser),
            Guess::State { guesses, .. } if guesses + 1 == ROUNDS => Some(Winner::Coin),
            Guess::State { .. } => None,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Coin => write!(f, "coin"),
            Winner::Guesser => write!(f, "guesser"),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Root => write!(f, "root"),
            Guess::State {
                coin,
                guesser,
                guesses,
                zero,
                min,
            } => match self.outcome() {
                Some(winner) => write!(f, "{} wins", winner),
                None => write!(
                    f,
                    "coin={};guesser={};guesses={};zero={};min={}",
                    coin, guesser, guesses, zero, min
                ),
            },
        }
    }
}
