mod command;
mod games;
mod guesses;

pub use command::*;
pub use games::*;
pub use guesses::*;
