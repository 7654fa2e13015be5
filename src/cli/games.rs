use crate::*;
use clap::Args;

#[derive(Args, Debug)]
pub struct GameArgs {
    /// Sample game name, or a unique prefix of one
    #[arg(short, long)]
    pub game: Sample,
    /// Number of players
    #[arg(short = 'n', long, default_value_t = 3)]
    pub players: usize,
    /// Second size parameter for games that take one
    #[arg(short, long)]
    pub m: Option<usize>,
    /// Print the payoff tensor
    #[arg(long)]
    pub payoffs: bool,
    /// List pure strategy equilibria
    #[arg(long)]
    pub pure: bool,
    /// Eliminate dominated actions
    #[arg(long)]
    pub iesds: bool,
    /// Test whether a mix of actions b and c dominates a, as `player,a,b,c`
    #[arg(long, value_delimiter = ',')]
    pub combo: Option<Vec<usize>>,
    /// Check a mixed profile given as JSON, e.g. `[[0.5,0.5],[1,0]]`
    #[arg(long)]
    pub profile: Option<String>,
    /// Check the known equilibrium profile of the game
    #[arg(long)]
    pub canned: bool,
    /// Payoffs of each action of the one player given as `null` in a JSON profile
    #[arg(long)]
    pub others: Option<String>,
    /// Solve a single support given as JSON, e.g. `[[0,1],[0,1]]`
    #[arg(long)]
    pub support: Option<String>,
    /// Enumerate every equilibrium
    #[arg(long)]
    pub all: bool,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl GameArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let mut game = self.game.game(self.players, self.m)?;
        log::info!("{} with {} players, shape {}", self.game, game.n(), game.shape());
        let bare = !(self.payoffs
            || self.pure
            || self.iesds
            || self.combo.is_some()
            || self.profile.is_some()
            || self.canned
            || self.others.is_some()
            || self.support.is_some());
        if self.payoffs {
            if self.json {
                println!("{}", serde_json::to_string(game.payoffs())?);
            } else {
                println!("{}", game);
            }
        }
        if self.pure {
            let pure = game.find_pure();
            if self.json {
                println!("{}", serde_json::to_string(&pure)?);
            } else {
                pure.iter()
                    .for_each(|actions| println!("pure: {}", self.describe(&game, actions)));
            }
        }
        if self.iesds {
            let dominated = game.iesds().clone();
            if self.json {
                println!("{}", serde_json::to_string(&dominated)?);
            } else {
                println!("dominated: {}", dominated);
            }
        }
        if let Some(combo) = self.combo.as_deref() {
            let [player, a, b, c] = combo else {
                anyhow::bail!("combo takes player,a,b,c, got {:?}", combo);
            };
            anyhow::ensure!(*player < game.n(), "no player {}", player);
            let actions = game.actions(*player);
            anyhow::ensure!(
                [a, b, c].iter().all(|x| **x < actions),
                "player {} has {} actions, got {:?}",
                player,
                actions,
                combo
            );
            println!("combo dominates: {}", game.combo_dominates(*player, *a, *b, *c));
        }
        if let Some(profile) = self.profile.as_deref() {
            let profile = serde_json::from_str::<Profile>(profile)?;
            self.verify(&game, &profile)?;
        }
        if self.canned {
            let profile = canned(self.game, self.players)?;
            println!("canned: {}", profile);
            self.verify(&game, &profile)?;
        }
        if let Some(others) = self.others.as_deref() {
            let others = serde_json::from_str::<Vec<Option<Strategy>>>(others)?;
            let payoffs = game.one_player_payoffs(&others)?;
            if self.json {
                println!("{}", serde_json::to_string(&payoffs)?);
            } else {
                println!("action payoffs: {:?}", payoffs);
            }
        }
        if let Some(support) = self.support.as_deref() {
            let support = Support::from(serde_json::from_str::<Vec<Vec<usize>>>(support)?);
            let found = game.find_support_equilibria(&support)?;
            self.report(&game, &found)?;
        }
        if self.all || bare {
            let found = game.find_all_equilibria().collect::<Vec<_>>();
            log::info!("found {} equilibria", found.len());
            self.report(&game, &found)?;
        }
        Ok(())
    }

    fn verify(&self, game: &Game, profile: &Profile) -> anyhow::Result<()> {
        let nash = game.is_nash(profile)?;
        let payoffs = game.get_profile_payoffs(profile)?;
        if self.json {
            println!("{}", serde_json::json!({ "nash": nash, "payoffs": payoffs }));
        } else {
            println!("nash: {}, payoffs: {:?}", nash, payoffs);
        }
        Ok(())
    }

    fn report(&self, game: &Game, found: &[Equilibrium]) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(found)?);
            return Ok(());
        }
        for e in found {
            if e.is_parametric() {
                println!("{} (parametric)", e);
            } else {
                println!("{} payoffs {:?}", e, e.payoffs(game));
            }
        }
        Ok(())
    }

    fn describe(&self, game: &Game, actions: &[usize]) -> String {
        actions
            .iter()
            .enumerate()
            .map(|(p, a)| format!("{}={}", game.players()[p], game.labels(p)[*a]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
