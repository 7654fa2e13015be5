use crate::*;

/// Epsilon-bounded comparisons for payoffs and probabilities.
///
/// `gt(x, y)` holds when `x > y + ε`; `eq(x, y)` holds when `x` and `y` are
/// strictly within `ε` of each other. Values exactly `ε` apart are neither
/// equal nor ordered by `gt`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance(f64);

impl Default for Tolerance {
    fn default() -> Self {
        Self(WIGGLE)
    }
}

impl From<f64> for Tolerance {
    fn from(epsilon: f64) -> Self {
        Self(epsilon.abs())
    }
}

impl Tolerance {
    pub fn epsilon(&self) -> f64 {
        self.0
    }
    pub fn eq(&self, x: f64, y: f64) -> bool {
        x + self.0 > y && y + self.0 > x
    }
    pub fn gt(&self, x: f64, y: f64) -> bool {
        x > y + self.0
    }
    /// Not beaten by more than the tolerance.
    pub fn ge(&self, x: f64, y: f64) -> bool {
        !self.gt(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // binary fractions keep the boundary arithmetic exact
    const EPS: Tolerance = Tolerance(0.5);

    #[test]
    fn equality_is_open_at_epsilon() {
        assert!(EPS.eq(1.0, 1.25));
        assert!(EPS.eq(1.25, 1.0));
        assert!(!EPS.eq(1.0, 1.5));
        assert!(!EPS.eq(1.5, 1.0));
    }

    #[test]
    fn ordering_needs_more_than_epsilon() {
        assert!(!EPS.gt(1.5, 1.0));
        assert!(EPS.gt(1.75, 1.0));
        assert!(!EPS.gt(1.0, 1.75));
        assert!(EPS.ge(1.0, 1.5));
        assert!(!EPS.ge(1.0, 1.75));
    }

    #[test]
    fn default_is_wiggle() {
        assert_eq!(Tolerance::default().epsilon(), WIGGLE);
        assert!(Tolerance::default().eq(0.1 + 0.2, 0.3));
    }
}
