//! The number-guessing game.
//!
//! A coin player and a guesser each pick a number from 0 to 5 at the same
//! time. Matching picks end the game in the guesser's favour; the coin wins
//! once three rounds pass without a match. Zero may be picked once, and every
//! nonzero pick by the coin must exceed its previous nonzero pick.

mod guess;
mod guessing;

pub use guess::*;
pub use guessing::*;
