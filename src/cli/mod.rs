use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Wordle in Discord channels")]
pub struct Cli {
    /// Config file, read if it exists.
    #[arg(long, env = "WORTLEBOT_TOML", default_value = "./wortlebot.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn action(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the effective configuration and loaded word lists, then exit.
    Config,

    /// Connect to Discord.
    #[default]
    Start,
}
