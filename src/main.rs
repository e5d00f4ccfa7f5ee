#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::{Cli, Command};

mod commands;
mod errors;

mod framework;
use framework::{Config, Data};

mod games;

use anyhow::Context as _;
use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use tracing::info;
use tracing_unwrap::ResultExt;

mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn print_config(data: &Data) -> anyhow::Result<()> {
    println!("{}", toml::to_string_pretty(data.config())?);

    for list in data.catalog().lists() {
        println!(
            "# {} ({}): {} words",
            list.name(),
            list.language(),
            list.len()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    framework::logging::init_tracing();

    let cli = Cli::parse();

    info!(version = built_info::PKG_VERSION, "starting wortlebot");

    let config = Config::load(&cli.config).expect_or_log("configuration could not be loaded");
    let data = Data::load(config).expect_or_log("word lists could not be set up");

    if cli.action() == Command::Config {
        return print_config(&data);
    }

    let token = data.config().bot.token()?;
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let framework = framework::poise::build(data);

    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .context("client should be valid")?;

    client
        .start()
        .await
        .context("client should not return error")?;

    Ok(())
}
