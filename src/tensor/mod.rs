//! Payoff tensors and the combinatorial iterators that walk them.
//!
//! - `Shape`: action counts per player, coordinate ↔ position mapping
//! - `Indices`: every coordinate tuple of a shape
//! - `Joint`: probability-weighted joint action combinations
//! - `Support` / `Supports`: candidate equilibrium supports
//! - `Payoffs`: the rank N+1 payoff tensor

mod indices;
mod joint;
mod payoffs;
mod shape;
mod subsets;
mod support;

pub use indices::*;
pub use joint::*;
pub use payoffs::*;
pub use shape::*;
pub use subsets::*;
pub use support::*;
