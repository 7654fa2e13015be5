//! Normal-form games and the equilibrium engine built on them.
//!
//! A [`Game`] owns a payoff tensor, labels, a comparison tolerance, and the
//! dominated-action sets grown by iterated elimination. Everything else here
//! is analysis over that state, split by concern into `impl Game` blocks.

mod dominated;
mod enumerate;
mod equilibrium;
mod expected;
mod game;
mod iesds;
mod nash;
mod profile;
mod pure;
mod strategy;
mod tolerance;

pub use dominated::*;
pub use equilibrium::*;
pub use game::*;
pub use profile::*;
pub use strategy::*;
pub use tolerance::*;
