//! Exact Nash equilibria for multi-player normal-form games.
//!
//! # Module Structure
//!
//! - `tensor`: Payoff tensor, shapes, and combinatorial index iterators
//! - `algebra`: Indifference systems and pluggable equation solvers
//! - `game`: Normal-form game: dominance, verification, equilibrium search
//! - `dag`: Backward induction over sequential game DAGs
//! - `samples`: Sample game factories
//! - `guessing`: Number-guessing sequential game
//! - `cli`: Console front end (feature `cli`)

mod algebra;
mod dag;
mod game;
mod guessing;
mod samples;
mod tensor;

#[cfg(feature = "cli")]
mod cli;

pub use algebra::*;
pub use dag::*;
pub use game::*;
pub use guessing::*;
pub use samples::*;
pub use tensor::*;

#[cfg(feature = "cli")]
pub use cli::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, expected values, and score vectors.
pub type Utility = f64;
/// Mixed strategy weights and joint action probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// NUMERIC TOLERANCE
// Payoffs built from floating point arithmetic need slack in comparisons.
// ============================================================================
/// Default comparison slack for payoffs and probabilities.
pub const WIGGLE: f64 = 1e-6;
/// Relative magnitude below which a row reduction pivot counts as zero.
pub const PIVOT_EPSILON: f64 = 1e-10;

// ============================================================================
// MULTILINEAR ROOT FINDING
// Supports where three or more players mix give polynomial systems.
// ============================================================================
/// Deterministic starting points tried per system.
pub const NEWTON_STARTS: usize = 48;
/// Newton steps per starting point before giving up.
pub const NEWTON_ITERATIONS: usize = 64;
/// Residual norm under which a point counts as a root.
pub const NEWTON_TOLERANCE: f64 = 1e-12;
/// Seed for the starting point generator.
pub const NEWTON_SEED: u64 = 0x6E61_7368;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
