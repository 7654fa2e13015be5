use crate::*;

/// A finite normal-form game.
///
/// Labels never affect analysis. Missing labels are filled with stringified
/// indices and surplus labels are dropped, independently per player.
#[derive(Debug, Clone)]
pub struct Game {
    payoffs: Payoffs,
    players: Vec<String>,
    actions: Vec<Vec<String>>,
    tolerance: Tolerance,
    dominated: Dominated,
}

impl From<Payoffs> for Game {
    fn from(payoffs: Payoffs) -> Self {
        let n = payoffs.players();
        let players = fill::<String>(&[], n);
        let actions = (0..n)
            .map(|p| fill::<String>(&[], payoffs.actions(p)))
            .collect();
        Self {
            payoffs,
            players,
            actions,
            tolerance: Tolerance::default(),
            dominated: Dominated::new(n),
        }
    }
}

impl Game {
    pub fn with_players<S: ToString>(mut self, labels: &[S]) -> Self {
        self.players = fill(labels, self.n());
        self
    }
    pub fn with_actions<S: ToString>(mut self, labels: &[Vec<S>]) -> Self {
        let actions = (0..self.n())
            .map(|p| match labels.get(p) {
                Some(given) => fill(given, self.actions(p)),
                None => fill::<String>(&[], self.actions(p)),
            })
            .collect();
        self.actions = actions;
        self
    }
    pub fn with_tolerance(mut self, epsilon: f64) -> Self {
        self.tolerance = Tolerance::from(epsilon);
        self
    }
}

impl Game {
    pub fn payoffs(&self) -> &Payoffs {
        &self.payoffs
    }
    pub fn shape(&self) -> &Shape {
        self.payoffs.shape()
    }
    /// Number of players.
    pub fn n(&self) -> usize {
        self.payoffs.players()
    }
    /// Number of actions available to `player`.
    pub fn actions(&self, player: usize) -> usize {
        self.payoffs.actions(player)
    }
    pub fn players(&self) -> &[String] {
        &self.players
    }
    pub fn labels(&self, player: usize) -> &[String] {
        &self.actions[player]
    }
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
    pub fn dominated(&self) -> &Dominated {
        &self.dominated
    }
    pub(crate) fn dominated_mut(&mut self) -> &mut Dominated {
        &mut self.dominated
    }
}

fn fill<S: ToString>(given: &[S], n: usize) -> Vec<String> {
    given
        .iter()
        .take(n)
        .map(|s| s.to_string())
        .chain((given.len()..n).map(|i| i.to_string()))
        .collect()
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "players {:?}", self.players)?;
        for (player, actions) in self.players.iter().zip(self.actions.iter()) {
            writeln!(f, "actions {:<8} {:?}", player, actions)?;
        }
        write!(f, "{}", self.payoffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payoffs() -> Payoffs {
        Payoffs::new(vec![2, 3], vec![0.; 12]).unwrap()
    }

    #[test]
    fn fills_missing_labels() {
        let game = Game::from(payoffs()).with_players(&["row"]);
        assert_eq!(game.players(), &["row", "1"]);
        assert_eq!(game.labels(1), &["0", "1", "2"]);
    }

    #[test]
    fn truncates_surplus_labels() {
        let game = Game::from(payoffs())
            .with_players(&["a", "b", "c"])
            .with_actions(&[vec!["up", "down", "sideways"], vec!["left"]]);
        assert_eq!(game.players(), &["a", "b"]);
        assert_eq!(game.labels(0), &["up", "down"]);
        assert_eq!(game.labels(1), &["left", "1", "2"]);
    }

    #[test]
    fn starts_with_nothing_dominated() {
        let game = Game::from(payoffs()).with_tolerance(1e-3);
        assert_eq!(game.dominated().count(), 0);
        assert_eq!(game.tolerance().epsilon(), 1e-3);
    }
}
