use crate::*;
use std::collections::BTreeMap;

/// A rank N+1 payoff tensor.
///
/// The first N axes index each player's action; the final axis, of length N,
/// selects whose payoff is returned. Stored flat: the payoff vector of an
/// action profile occupies `N` consecutive slots at `position × N`.
///
/// Immutable once built. Every constructor validates the shape invariants:
/// at least one player, at least one action per player, and exactly one
/// payoff per player at every action profile.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Payoffs {
    shape: Shape,
    data: Vec<Utility>,
}

impl Payoffs {
    /// Builds a tensor from action counts and flat row-major data.
    pub fn new(actions: Vec<usize>, data: Vec<Utility>) -> anyhow::Result<Self> {
        let shape = Shape::from(actions);
        anyhow::ensure!(shape.n() > 0, "payoff tensor needs at least one player");
        anyhow::ensure!(
            shape.dims().iter().all(|d| *d > 0),
            "every player needs at least one action, got shape {:?}",
            shape.dims()
        );
        anyhow::ensure!(
            data.len() == shape.size() * shape.n(),
            "payoff data has {} entries but shape {:?} with {} players needs {}",
            data.len(),
            shape.dims(),
            shape.n(),
            shape.size() * shape.n()
        );
        anyhow::ensure!(
            data.iter().all(|u| u.is_finite()),
            "payoff data must be finite"
        );
        Ok(Self { shape, data })
    }
    /// Builds a tensor by evaluating every action profile.
    pub fn from_fn<F>(actions: Vec<usize>, mut payoff: F) -> anyhow::Result<Self>
    where
        F: FnMut(&[usize]) -> Vec<Utility>,
    {
        let n = actions.len();
        let mut data = Vec::with_capacity(actions.iter().product::<usize>() * n);
        for profile in Indices::from(actions.clone()) {
            let vector = payoff(&profile);
            anyhow::ensure!(
                vector.len() == n,
                "payoff at {:?} has {} entries, expected {}",
                profile,
                vector.len(),
                n
            );
            data.extend(vector);
        }
        Self::new(actions, data)
    }
    /// Two-player zero-sum tensor from the first player's payoff matrix.
    pub fn zero_sum(matrix: &[Vec<Utility>]) -> anyhow::Result<Self> {
        let (rows, cols) = Self::rectangle(matrix)?;
        Self::from_fn(vec![rows, cols], |a| {
            let u = matrix[a[0]][a[1]];
            vec![u, -u]
        })
    }
    /// Two-player symmetric tensor from the row player's payoff matrix.
    pub fn symmetric(matrix: &[Vec<Utility>]) -> anyhow::Result<Self> {
        let (rows, cols) = Self::rectangle(matrix)?;
        anyhow::ensure!(
            rows == cols,
            "symmetric game needs a square matrix, got {}×{}",
            rows,
            cols
        );
        Self::from_fn(vec![rows, cols], |a| {
            vec![matrix[a[0]][a[1]], matrix[a[1]][a[0]]]
        })
    }
    /// Tensor from payoff vectors keyed by action-value tuples.
    ///
    /// Each axis is indexed by the sorted distinct values seen at that
    /// position of the keys; every combination must be present.
    pub fn from_map<K>(map: &BTreeMap<Vec<K>, Vec<Utility>>) -> anyhow::Result<Self>
    where
        K: Ord + Clone + std::fmt::Debug,
    {
        let n = map
            .keys()
            .next()
            .map(Vec::len)
            .ok_or_else(|| anyhow::anyhow!("payoff map is empty"))?;
        anyhow::ensure!(
            map.keys().all(|k| k.len() == n),
            "payoff map keys must all name {} actions",
            n
        );
        let values = (0..n)
            .map(|axis| {
                map.keys()
                    .map(|k| k[axis].clone())
                    .collect::<std::collections::BTreeSet<K>>()
                    .into_iter()
                    .collect::<Vec<K>>()
            })
            .collect::<Vec<_>>();
        let actions = values.iter().map(Vec::len).collect::<Vec<_>>();
        let mut data = Vec::with_capacity(actions.iter().product::<usize>() * n);
        for profile in Indices::from(actions.clone()) {
            let key = profile
                .iter()
                .enumerate()
                .map(|(axis, i)| values[axis][*i].clone())
                .collect::<Vec<K>>();
            let vector = map
                .get(&key)
                .ok_or_else(|| anyhow::anyhow!("payoff map is missing {:?}", key))?;
            anyhow::ensure!(
                vector.len() == n,
                "payoff at {:?} has {} entries, expected {}",
                key,
                vector.len(),
                n
            );
            data.extend(vector.iter().copied());
        }
        Self::new(actions, data)
    }
    fn rectangle(matrix: &[Vec<Utility>]) -> anyhow::Result<(usize, usize)> {
        let rows = matrix.len();
        let cols = matrix.first().map(Vec::len).unwrap_or_default();
        anyhow::ensure!(rows > 0 && cols > 0, "payoff matrix is empty");
        anyhow::ensure!(
            matrix.iter().all(|r| r.len() == cols),
            "payoff matrix is ragged"
        );
        Ok((rows, cols))
    }
}

impl Payoffs {
    /// Number of players.
    pub fn players(&self) -> usize {
        self.shape.n()
    }
    /// Number of actions available to a player.
    pub fn actions(&self, player: usize) -> usize {
        self.shape.dim(player)
    }
    /// Action counts per player.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
    /// Payoff vector (one entry per player) at an action profile.
    pub fn at(&self, profile: &[usize]) -> &[Utility] {
        let n = self.players();
        let offset = self.shape.position(profile) * n;
        &self.data[offset..offset + n]
    }
    /// One player's payoff at an action profile.
    pub fn get(&self, profile: &[usize], player: usize) -> Utility {
        self.at(profile)[player]
    }
    /// Flat row-major data.
    pub fn data(&self) -> &[Utility] {
        &self.data
    }
}

/// Nested JSON arrays of numbers, N action axes deep plus the player axis.
impl TryFrom<&serde_json::Value> for Payoffs {
    type Error = anyhow::Error;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let mut dims = Vec::new();
        let mut cursor = value;
        while let serde_json::Value::Array(items) = cursor {
            anyhow::ensure!(!items.is_empty(), "payoff array has an empty axis");
            dims.push(items.len());
            cursor = &items[0];
        }
        anyhow::ensure!(dims.len() >= 2, "payoff array needs at least two axes");
        let n = dims.len() - 1;
        anyhow::ensure!(
            dims[n] == n,
            "last axis has length {} but there are {} players",
            dims[n],
            n
        );
        let mut data = Vec::with_capacity(dims.iter().product());
        flatten(value, &dims, &mut data)?;
        Self::new(dims[..n].to_vec(), data)
    }
}

fn flatten(value: &serde_json::Value, dims: &[usize], data: &mut Vec<Utility>) -> anyhow::Result<()> {
    match (value, dims.split_first()) {
        (serde_json::Value::Array(items), Some((dim, rest))) => {
            anyhow::ensure!(
                items.len() == *dim,
                "ragged payoff array: axis of length {} where {} expected",
                items.len(),
                dim
            );
            items.iter().try_for_each(|item| flatten(item, rest, data))
        }
        (serde_json::Value::Number(x), None) => {
            data.push(
                x.as_f64()
                    .ok_or_else(|| anyhow::anyhow!("payoff {} is not a real number", x))?,
            );
            Ok(())
        }
        (other, _) => Err(anyhow::anyhow!("malformed payoff entry {}", other)),
    }
}

impl Arbitrary for Payoffs {
    fn random() -> Self {
        let n = rand::random_range(2..=3);
        let actions = (0..n)
            .map(|_| rand::random_range(2..=3))
            .collect::<Vec<usize>>();
        let size = actions.iter().product::<usize>() * n;
        let data = (0..size)
            .map(|_| rand::random_range(-4..=4) as Utility)
            .collect::<Vec<_>>();
        Self::new(actions, data).expect("random shape is valid")
    }
}

impl std::fmt::Display for Payoffs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "payoffs {}×{}", self.shape, self.players())?;
        for profile in self.shape.indices() {
            let vector = self
                .at(&profile)
                .iter()
                .map(|u| format!("{:>8.3}", u))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{:?} → [{}]", profile, vector)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_data_length() {
        assert!(Payoffs::new(vec![2, 2], vec![0.; 8]).is_ok());
        assert!(Payoffs::new(vec![2, 2], vec![0.; 7]).is_err());
        assert!(Payoffs::new(vec![2, 0], vec![]).is_err());
        assert!(Payoffs::new(vec![], vec![]).is_err());
    }

    #[test]
    fn rejects_short_payoff_vectors() {
        assert!(Payoffs::from_fn(vec![2, 2], |_| vec![0.]).is_err());
    }

    #[test]
    fn indexing_matches_construction() {
        let payoffs = Payoffs::from_fn(vec![2, 3, 2], |a| {
            (0..3).map(|p| (100 * a[0] + 10 * a[1] + a[2] + 1000 * p) as Utility).collect()
        })
        .unwrap();
        assert_eq!(payoffs.players(), 3);
        assert_eq!(payoffs.actions(1), 3);
        assert_eq!(payoffs.get(&[1, 2, 0], 0), 120.);
        assert_eq!(payoffs.get(&[1, 2, 0], 2), 2120.);
        assert_eq!(payoffs.at(&[0, 1, 1]), &[11., 1011., 2011.]);
    }

    #[test]
    fn zero_sum_negates() {
        let payoffs = Payoffs::zero_sum(&[vec![1., -1.], vec![-1., 1.]]).unwrap();
        assert_eq!(payoffs.at(&[0, 0]), &[1., -1.]);
        assert_eq!(payoffs.at(&[0, 1]), &[-1., 1.]);
    }

    #[test]
    fn symmetric_transposes() {
        let payoffs = Payoffs::symmetric(&[vec![3., 0.], vec![5., 1.]]).unwrap();
        assert_eq!(payoffs.at(&[0, 1]), &[0., 5.]);
        assert_eq!(payoffs.at(&[1, 0]), &[5., 0.]);
        assert!(Payoffs::symmetric(&[vec![1., 2., 3.]]).is_err());
    }

    #[test]
    fn map_keys_sort_per_axis() {
        let map = [
            (vec!['F', 'a'], vec![1., -1.]),
            (vec!['F', 'b'], vec![2., -2.]),
            (vec!['B', 'a'], vec![3., -3.]),
            (vec!['B', 'b'], vec![4., -4.]),
        ]
        .into_iter()
        .collect::<BTreeMap<_, _>>();
        let payoffs = Payoffs::from_map(&map).unwrap();
        assert_eq!(payoffs.shape().dims(), &[2, 2]);
        assert_eq!(payoffs.at(&[0, 1]), &[4., -4.]);
        assert_eq!(payoffs.at(&[1, 0]), &[1., -1.]);
    }

    #[test]
    fn map_must_be_complete() {
        let map = [(vec![0, 0], vec![1., 1.]), (vec![1, 1], vec![1., 1.])]
            .into_iter()
            .collect::<BTreeMap<_, _>>();
        assert!(Payoffs::from_map(&map).is_err());
    }

    #[test]
    fn parses_nested_json() {
        let json = serde_json::json!([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]);
        let payoffs = Payoffs::try_from(&json).unwrap();
        assert_eq!(payoffs.players(), 2);
        assert_eq!(payoffs.at(&[1, 0]), &[5., 6.]);
    }

    #[test]
    fn rejects_ragged_json() {
        let ragged = serde_json::json!([[[1, 2], [3, 4]], [[5, 6]]]);
        assert!(Payoffs::try_from(&ragged).is_err());
        let players = serde_json::json!([[[1, 2, 0], [3, 4, 0]], [[5, 6, 0], [7, 8, 0]]]);
        assert!(Payoffs::try_from(&players).is_err());
        let text = serde_json::json!([[["a", 2], [3, 4]], [[5, 6], [7, 8]]]);
        assert!(Payoffs::try_from(&text).is_err());
    }

    #[test]
    fn random_tensors_are_valid() {
        for _ in 0..32 {
            let payoffs = Payoffs::random();
            assert!(payoffs.players() >= 2);
            assert_eq!(
                payoffs.data().len(),
                payoffs.shape().size() * payoffs.players()
            );
        }
    }
}
