use crate::*;

/// Every sample game by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    BattleOfGenders,
    DetenteOfGenders,
    Reducible,
    ComboReducible,
    Dunderheads,
    PrisonersDilemma,
    MatchingPennies,
    HowLowDareYouGo,
    MixedDom,
    Chicken,
    StagHunt,
    AllPayAuction,
    Negadd,
    StrippedPoker,
}

impl Sample {
    pub const ALL: [Sample; 14] = [
        Sample::BattleOfGenders,
        Sample::DetenteOfGenders,
        Sample::Reducible,
        Sample::ComboReducible,
        Sample::Dunderheads,
        Sample::PrisonersDilemma,
        Sample::MatchingPennies,
        Sample::HowLowDareYouGo,
        Sample::MixedDom,
        Sample::Chicken,
        Sample::StagHunt,
        Sample::AllPayAuction,
        Sample::Negadd,
        Sample::StrippedPoker,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sample::BattleOfGenders => "battle_of_genders",
            Sample::DetenteOfGenders => "detente_of_genders",
            Sample::Reducible => "reducible",
            Sample::ComboReducible => "combo_reducible",
            Sample::Dunderheads => "dunderheads",
            Sample::PrisonersDilemma => "prisoners_dilemma",
            Sample::MatchingPennies => "matching_pennies",
            Sample::HowLowDareYouGo => "how_low_dare_you_go",
            Sample::MixedDom => "mixed_dom",
            Sample::Chicken => "chicken",
            Sample::StagHunt => "stag_hunt",
            Sample::AllPayAuction => "all_pay_auction",
            Sample::Negadd => "negadd",
            Sample::StrippedPoker => "stripped_poker",
        }
    }

    /// Default for the second size parameter, for games that take one.
    pub fn m(&self, n: usize) -> Option<usize> {
        match self {
            Sample::DetenteOfGenders => Some(2),
            Sample::HowLowDareYouGo => Some(n + 1),
            Sample::MixedDom => Some(2),
            Sample::StagHunt => Some(n),
            Sample::AllPayAuction => Some(2),
            Sample::StrippedPoker => Some(1),
            _ => None,
        }
    }

    /// Payoff tensor for `n` players. `m` falls back to the game's default.
    pub fn payoffs(&self, n: usize, m: Option<usize>) -> anyhow::Result<Payoffs> {
        let m = m.or(self.m(n)).unwrap_or_default();
        match self {
            Sample::BattleOfGenders => battle_of_genders(n),
            Sample::DetenteOfGenders => detente_of_genders(n, m),
            Sample::Reducible => reducible(n),
            Sample::ComboReducible => combo_reducible(n),
            Sample::Dunderheads => dunderheads(n),
            Sample::PrisonersDilemma => prisoners_dilemma(n),
            Sample::MatchingPennies => matching_pennies(n),
            Sample::HowLowDareYouGo => how_low_dare_you_go(n, m),
            Sample::MixedDom => mixed_dom(n, m),
            Sample::Chicken => chicken(n),
            Sample::StagHunt => stag_hunt(n, m),
            Sample::AllPayAuction => all_pay_auction(n, m),
            Sample::Negadd => negadd(n),
            Sample::StrippedPoker => stripped_poker(n, m),
        }
    }

    /// Labelled game for `n` players.
    pub fn game(&self, n: usize, m: Option<usize>) -> anyhow::Result<Game> {
        let game = Game::from(self.payoffs(n, m)?);
        let binary = |a: &str, b: &str| vec![vec![a.to_string(), b.to_string()]; n];
        Ok(match self {
            Sample::PrisonersDilemma => game.with_actions(&binary("cooperate", "defect")),
            Sample::Dunderheads => game.with_actions(&binary("high", "low")),
            Sample::Chicken => game.with_actions(&binary("chicken", "hawk")),
            Sample::StagHunt => game.with_actions(&binary("rabbit", "stag")),
            Sample::StrippedPoker => game
                .with_players(&["dealer", "student"])
                .with_actions(&[vec!["bet", "fold"]]),
            _ => game,
        })
    }
}

impl std::str::FromStr for Sample {
    type Err = anyhow::Error;
    /// Exact names, or any prefix that names exactly one game.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(sample) = Sample::ALL.iter().find(|x| x.name() == s) {
            return Ok(*sample);
        }
        let matches = Sample::ALL
            .iter()
            .filter(|x| x.name().starts_with(s))
            .collect::<Vec<_>>();
        match matches.as_slice() {
            [sample] => Ok(**sample),
            [] => Err(anyhow::anyhow!(
                "unknown game {}, choose from {}",
                s,
                Sample::ALL.map(|x| x.name()).join(", ")
            )),
            many => Err(anyhow::anyhow!(
                "ambiguous game {}: {}",
                s,
                many.iter().map(|x| x.name()).collect::<Vec<_>>().join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
