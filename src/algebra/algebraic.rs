use crate::*;

/// Routes each system to the solver suited to its degree.
///
/// Linear systems go through exact row reduction, which also reports
/// parametric families. Multilinear systems go through Newton.
#[derive(Debug, Clone, Copy, Default)]
pub struct Algebraic {
    linear: Gaussian,
    nonlinear: Newton,
}

impl From<Newton> for Algebraic {
    fn from(nonlinear: Newton) -> Self {
        Self {
            linear: Gaussian,
            nonlinear,
        }
    }
}

impl Solve for Algebraic {
    fn solve(&self, system: &System) -> anyhow::Result<Vec<Solution>> {
        match system.degree() {
            0 | 1 => self.linear.solve(system),
            _ => self.nonlinear.solve(system),
        }
    }
}
