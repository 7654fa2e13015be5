use crate::*;
use std::collections::BTreeMap;

/// One solution of an indifference system: every unknown mapped to a value
/// or to a residual expression in the free unknowns that remain.
pub type Solution = BTreeMap<Var, Affine>;

/// An equation solving capability for indifference systems.
///
/// Implementations return every solution they can establish: none when the
/// system is inconsistent, one assignment (possibly parametric), or several
/// disjoint assignments. An `Err` means the solver could not handle the
/// system; callers treat that as "no equilibrium on this support".
pub trait Solve: Send + Sync {
    fn solve(&self, system: &System) -> anyhow::Result<Vec<Solution>>;
}
