//! Sample games.
//!
//! Factories return validated payoff tensors for a requested player count,
//! and an input error for player counts a game does not support. Some take a
//! second size parameter `m` with a per-game default.

mod canned;
mod contests;
mod coordination;
mod dominance;
mod poker;
mod sample;

pub use canned::*;
pub use contests::*;
pub use coordination::*;
pub use dominance::*;
pub use poker::*;
pub use sample::*;

fn at_least(game: &str, n: usize, min: usize) -> anyhow::Result<()> {
    anyhow::ensure!(n >= min, "{} needs at least {} players, got {}", game, min, n);
    Ok(())
}

fn exactly(game: &str, n: usize, players: usize) -> anyhow::Result<()> {
    anyhow::ensure!(n == players, "{} is only defined for {} players, got {}", game, players, n);
    Ok(())
}
