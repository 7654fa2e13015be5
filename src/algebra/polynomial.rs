use std::collections::BTreeMap;

/// A multilinear polynomial over indexed unknowns.
///
/// Each monomial is a sorted list of distinct unknown indices mapped to its
/// coefficient; the empty monomial is the constant term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial(BTreeMap<Vec<usize>, f64>);

impl Polynomial {
    /// Adds `coefficient · Π unknowns`.
    pub fn add(&mut self, coefficient: f64, mut unknowns: Vec<usize>) {
        unknowns.sort_unstable();
        debug_assert!(unknowns.windows(2).all(|w| w[0] != w[1]), "not multilinear");
        *self.0.entry(unknowns).or_default() += coefficient;
    }
    /// Highest monomial degree with a nonzero coefficient.
    pub fn degree(&self) -> usize {
        self.monomials()
            .map(|(m, _)| m.len())
            .max()
            .unwrap_or_default()
    }
    /// Monomials with nonzero coefficients.
    pub fn monomials(&self) -> impl Iterator<Item = (&[usize], f64)> {
        self.0
            .iter()
            .filter(|(_, c)| **c != 0.)
            .map(|(m, c)| (m.as_slice(), *c))
    }
    /// Constant term.
    pub fn constant(&self) -> f64 {
        self.0.get(&Vec::new()).copied().unwrap_or_default()
    }
    /// Value at a point.
    pub fn eval(&self, x: &[f64]) -> f64 {
        self.monomials()
            .map(|(m, c)| c * m.iter().map(|i| x[*i]).product::<f64>())
            .sum()
    }
    /// Gradient at a point, dense over `n` unknowns.
    pub fn gradient(&self, x: &[f64], n: usize) -> Vec<f64> {
        let mut gradient = vec![0.; n];
        for (m, c) in self.monomials() {
            for (k, i) in m.iter().enumerate() {
                gradient[*i] += c * m
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != k)
                    .map(|(_, u)| x[*u])
                    .product::<f64>();
            }
        }
        gradient
    }
}
