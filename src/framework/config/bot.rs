use poise::serenity_prelude::ActivityData;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BotConfig {
    #[serde(skip_serializing)]
    token: Option<String>,
    activity: Option<String>,
}

impl BotConfig {
    /// `bot.token` from the config, otherwise `DISCORD_TOKEN`.
    pub fn token(&self) -> Result<String, super::Error> {
        self.token
            .clone()
            .or_else(|| std::env::var("DISCORD_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(super::Error::MissingToken)
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            debug!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed_activity = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!(kind = ?parsed_activity.kind, name = %parsed_activity.name, "parsed bot.activity");
        info!("successfully parsed bot activity from config");

        Some(parsed_activity)
    }
}
