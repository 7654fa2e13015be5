use super::GameArgs;
use super::GuessArgs;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(
        about = "Analyze a sample normal-form game",
        alias = "g"
    )]
    Game(GameArgs),
    #[command(
        about = "Explore the number-guessing sequential game",
        alias = "n"
    )]
    Guess(GuessArgs),
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Game(args) => args.verbose,
            Command::Guess(args) => args.verbose,
        }
    }
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Game(args) => args.run(),
            Command::Guess(args) => args.run(),
        }
    }
}
