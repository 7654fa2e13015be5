use crate::*;

/// Joint action combinations of independent mixed strategies.
///
/// Each player contributes a sparse list of `(action, probability)` pairs.
/// Yields every joint action tuple together with the product of the
/// chosen probabilities. Cost is the product of the list lengths.
pub struct Joint {
    strategies: Vec<Vec<(usize, Probability)>>,
    indices: Indices,
}

impl From<Vec<Vec<(usize, Probability)>>> for Joint {
    fn from(strategies: Vec<Vec<(usize, Probability)>>) -> Self {
        let indices = Indices::from(strategies.iter().map(Vec::len).collect::<Vec<_>>());
        Self {
            strategies,
            indices,
        }
    }
}

impl Iterator for Joint {
    type Item = (Vec<usize>, Probability);
    fn next(&mut self) -> Option<Self::Item> {
        let picks = self.indices.next()?;
        Some(
            picks
                .into_iter()
                .enumerate()
                .map(|(player, i)| self.strategies[player][i])
                .fold((Vec::new(), 1.), |(mut actions, p), (a, q)| {
                    actions.push(a);
                    (actions, p * q)
                }),
        )
    }
}
