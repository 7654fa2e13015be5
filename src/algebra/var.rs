/// An unknown probability: how often `player` plays `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Var {
    pub player: usize,
    pub action: usize,
}

impl From<(usize, usize)> for Var {
    fn from((player, action): (usize, usize)) -> Self {
        Self { player, action }
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p[{},{}]", self.player, self.action)
    }
}
