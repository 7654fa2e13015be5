use crate::*;

/// `constant + Σ coefficient · unknown`.
///
/// A concrete probability has no terms. A probability left undetermined by
/// its indifference system is expressed through the free unknowns that
/// remain; a free unknown is the expression `1 · itself`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Affine {
    constant: f64,
    terms: Vec<(Var, f64)>,
}

impl From<f64> for Affine {
    fn from(constant: f64) -> Self {
        Self {
            constant,
            terms: Vec::new(),
        }
    }
}

impl From<Var> for Affine {
    fn from(var: Var) -> Self {
        Self {
            constant: 0.,
            terms: vec![(var, 1.)],
        }
    }
}

impl Affine {
    /// Builds an expression, dropping zero coefficients.
    pub fn new(constant: f64, terms: impl IntoIterator<Item = (Var, f64)>) -> Self {
        let mut terms = terms
            .into_iter()
            .filter(|(_, c)| *c != 0.)
            .collect::<Vec<_>>();
        terms.sort_by(|a, b| a.0.cmp(&b.0));
        Self { constant, terms }
    }
    /// The value, if no unknowns remain.
    pub fn value(&self) -> Option<Probability> {
        self.terms.is_empty().then_some(self.constant)
    }
    /// True if no unknowns remain.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }
    /// The constant part.
    pub fn constant(&self) -> f64 {
        self.constant
    }
    /// Unknowns this expression depends on.
    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.terms.iter().map(|(v, _)| *v)
    }
    /// Coefficient of `var`, zero if absent.
    pub fn coefficient(&self, var: Var) -> f64 {
        self.terms
            .iter()
            .find(|(v, _)| *v == var)
            .map_or(0., |(_, c)| *c)
    }
    /// True if constants and every coefficient agree within `epsilon`.
    pub fn is_close(&self, other: &Affine, epsilon: f64) -> bool {
        (self.constant - other.constant).abs() <= epsilon
            && self
                .vars()
                .chain(other.vars())
                .all(|v| (self.coefficient(v) - other.coefficient(v)).abs() <= epsilon)
    }
    /// Evaluates with every unknown assigned.
    pub fn eval<F>(&self, assignment: F) -> f64
    where
        F: Fn(Var) -> f64,
    {
        self.terms
            .iter()
            .fold(self.constant, |sum, (v, c)| sum + c * assignment(*v))
    }
}

impl std::fmt::Display for Affine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{:.4}", self.constant);
        }
        let mut first = true;
        if self.constant != 0. {
            write!(f, "{:.4}", self.constant)?;
            first = false;
        }
        for (var, coefficient) in self.terms.iter() {
            let sign = if *coefficient < 0. { "-" } else { "+" };
            let magnitude = coefficient.abs();
            match (first, sign, magnitude == 1.) {
                (true, "-", true) => write!(f, "-{}", var)?,
                (true, "-", false) => write!(f, "-{:.4}·{}", magnitude, var)?,
                (true, _, true) => write!(f, "{}", var)?,
                (true, _, false) => write!(f, "{:.4}·{}", magnitude, var)?,
                (false, _, true) => write!(f, " {} {}", sign, var)?,
                (false, _, false) => write!(f, " {} {:.4}·{}", sign, magnitude, var)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_values() {
        assert_eq!(Affine::from(0.25).value(), Some(0.25));
        assert_eq!(Affine::from(Var::from((0, 1))).value(), None);
    }

    #[test]
    fn evaluates_terms() {
        let x = Var::from((0, 1));
        let y = Var::from((1, 0));
        let expr = Affine::new(1., [(x, -1.), (y, 2.)]);
        let value = expr.eval(|v| if v == x { 0.25 } else { 0.5 });
        assert!((value - 1.75).abs() < 1e-12);
    }

    #[test]
    fn drops_zero_terms() {
        let expr = Affine::new(0.5, [(Var::from((0, 0)), 0.)]);
        assert!(expr.is_constant());
    }

    #[test]
    fn closeness_compares_every_coefficient() {
        let x = Var::from((0, 1));
        let y = Var::from((1, 0));
        let expr = Affine::new(1., [(x, -1.)]);
        assert!(expr.is_close(&Affine::new(1. + 1e-9, [(x, -1.)]), 1e-6));
        assert!(!expr.is_close(&Affine::new(1., [(x, -1.), (y, 0.5)]), 1e-6));
        assert!(!expr.is_close(&Affine::from(1.), 1e-6));
    }

    #[test]
    fn displays_residuals() {
        let expr = Affine::new(1., [(Var::from((0, 1)), -1.)]);
        assert_eq!(expr.to_string(), "1.0000 - p[0,1]");
        assert_eq!(Affine::from(Var::from((2, 3))).to_string(), "p[2,3]");
    }
}
