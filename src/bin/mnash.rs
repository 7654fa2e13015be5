//! Nash Equilibrium Console
//!
//! Analyzes sample normal-form games and the number-guessing game.

use clap::Parser;
use mnash::*;

fn main() {
    let command = Command::parse();
    log(if command.verbose() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    if let Err(e) = command.run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
