use crate::*;

/// Action counts per player.
///
/// The axes of a payoff tensor without the trailing player axis. Coordinates
/// are laid out row-major: the first axis is most significant, so
/// `position` is monotone in the iteration order of [`Indices`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape(Vec<usize>);

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl Shape {
    /// Number of axes.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// Length of every axis.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }
    /// Length of one axis.
    pub fn dim(&self, axis: usize) -> usize {
        self.0[axis]
    }
    /// Number of coordinate tuples.
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }
    /// Every coordinate tuple, row-major.
    pub fn indices(&self) -> Indices {
        Indices::from(self.0.clone())
    }
    /// True if every coordinate is in range.
    pub fn contains(&self, coords: &[usize]) -> bool {
        coords.len() == self.n() && coords.iter().zip(self.0.iter()).all(|(c, d)| c < d)
    }
    /// Coordinates of a linear position.
    pub fn coords(&self, pos: usize) -> Vec<usize> {
        debug_assert!(pos < self.size());
        let mut pos = pos;
        let mut coords = vec![0; self.n()];
        for (axis, dim) in self.0.iter().enumerate().rev() {
            coords[axis] = pos % dim;
            pos /= dim;
        }
        coords
    }
    /// Linear position of a coordinate tuple.
    pub fn position(&self, coords: &[usize]) -> usize {
        debug_assert!(self.contains(coords), "{:?} outside {:?}", coords, self.0);
        coords
            .iter()
            .zip(self.0.iter())
            .fold(0, |pos, (c, d)| pos * d + c)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = self
            .0
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("×");
        write!(f, "{}", dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_and_position_are_inverse() {
        let shape = Shape::from(vec![3, 2, 4]);
        for pos in 0..shape.size() {
            assert_eq!(shape.position(&shape.coords(pos)), pos);
        }
    }

    #[test]
    fn first_axis_most_significant() {
        let shape = Shape::from(vec![3, 3, 2]);
        assert_eq!(shape.coords(0), vec![0, 0, 0]);
        assert_eq!(shape.coords(1), vec![0, 0, 1]);
        assert_eq!(shape.coords(6), vec![1, 0, 0]);
        assert_eq!(shape.position(&[2, 2, 1]), 17);
    }

    #[test]
    fn indices_follow_positions() {
        let shape = Shape::from(vec![2, 3]);
        let visited = shape
            .indices()
            .map(|c| shape.position(&c))
            .collect::<Vec<_>>();
        assert_eq!(visited, (0..6).collect::<Vec<_>>());
    }
}
