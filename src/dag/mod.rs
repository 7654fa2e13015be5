//! Backward induction over sequential games of simultaneous moves.
//!
//! A [`Sequential`] domain describes states and transitions. A [`Dag`]
//! expands the reachable states into a graph and scores each state by
//! solving the one-shot game induced by its children's scores.

mod dag;
mod node;
mod sequential;
mod status;

pub use dag::*;
pub use node::*;
pub use sequential::*;
pub use status::*;
