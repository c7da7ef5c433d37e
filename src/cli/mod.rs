mod args;
mod command;

pub use args::Cli;
pub use command::{Command, ListArgs, OutputArgs};

pub use args::parse;
