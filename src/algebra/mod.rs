//! Indifference systems and the equation solvers behind them.
//!
//! A candidate support induces one unknown per supported action of every
//! mixing player. The equations are multilinear polynomials; solvers return
//! each solution as a map from unknown to [`Affine`] expression so that
//! parametric families survive as residual expressions in free unknowns.

mod affine;
mod algebraic;
mod gaussian;
mod newton;
mod polynomial;
mod solve;
mod system;
mod var;

pub use affine::*;
pub use algebraic::*;
pub use gaussian::*;
pub use newton::*;
pub use polynomial::*;
pub use solve::*;
pub use system::*;
pub use var::*;
