/// Odometer over every coordinate tuple of a shape.
///
/// The last axis turns fastest. A shape with any empty axis yields nothing;
/// a shape with no axes yields the single empty tuple.
#[derive(Debug, Clone)]
pub struct Indices {
    dims: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl From<Vec<usize>> for Indices {
    fn from(dims: Vec<usize>) -> Self {
        let next = (!dims.contains(&0)).then(|| vec![0; dims.len()]);
        Self { dims, next }
    }
}

impl Iterator for Indices {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        for axis in (0..self.dims.len()).rev() {
            successor[axis] += 1;
            if successor[axis] < self.dims[axis] {
                self.next = Some(successor);
                break;
            }
            successor[axis] = 0;
        }
        Some(current)
    }
}
