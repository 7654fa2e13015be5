/// Actions removed by iterated elimination, one ordered list per player.
///
/// Lists only grow, in discovery order. Callers get a read-only view; the
/// dominance engine is the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dominated(Vec<Vec<usize>>);

impl Dominated {
    pub fn new(players: usize) -> Self {
        Self(vec![Vec::new(); players])
    }
    pub fn of(&self, player: usize) -> &[usize] {
        &self.0[player]
    }
    pub fn contains(&self, player: usize, action: usize) -> bool {
        self.0[player].contains(&action)
    }
    /// Total eliminated actions across players.
    pub fn count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
    pub fn players(&self) -> &[Vec<usize>] {
        &self.0
    }
    /// Records a newly dominated action. Returns false if already present.
    pub(crate) fn insert(&mut self, player: usize, action: usize) -> bool {
        if self.contains(player, action) {
            return false;
        }
        self.0[player].push(action);
        true
    }
}

impl std::fmt::Display for Dominated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_in_discovery_order() {
        let mut dominated = Dominated::new(2);
        assert!(dominated.insert(1, 2));
        assert!(dominated.insert(1, 0));
        assert!(!dominated.insert(1, 2));
        assert_eq!(dominated.of(1), &[2, 0]);
        assert_eq!(dominated.count(), 2);
        assert!(dominated.of(0).is_empty());
    }
}
