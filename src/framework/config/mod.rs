use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

mod bot;
pub use bot::BotConfig;

mod wordle;
pub use wordle::WordleConfig;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub wordle: WordleConfig,
}

impl Config {
    /// Reads `path` if it exists, then applies `WORTLEBOT__SECTION__KEY` overrides.
    #[instrument(name = "config", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            info!("no config file found, using defaults and environment");
        }

        let config: Self = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix("WORTLEBOT").separator("__"))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        info!("config loaded");

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),

    #[error("no bot token: set bot.token in the config file or DISCORD_TOKEN")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::{Config, Error};
    use crate::games::wordle::GameStyle;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("wortlebot-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("./definitely-not-here.toml")).unwrap();

        assert_eq!(config.wordle.defaults.word_list, "Wordle");
        assert_eq!(config.wordle.defaults.guess_list, "Wordle-all");
        assert_eq!(config.wordle.lists.len(), 7);
        assert_eq!(config.wordle.alphabets.len(), 2);
        assert_eq!(config.wordle.style, GameStyle::Letters);
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_config(
            "overrides",
            r#"
            [bot]
            activity = "playing wortle"

            [wordle]
            lists_dir = "/srv/lists"
            style = "colors"

            [wordle.defaults]
            word_list = "German"
            alphabet = "German"
            min_length = 5
            max_length = 5

            [[wordle.lists]]
            name = "German"
            file = "german.txt"
            description = "Deutsche Wörter"
            language = "de"
            "#,
        );

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.wordle.lists_dir, Path::new("/srv/lists"));
        assert_eq!(config.wordle.style, GameStyle::Colors);
        assert_eq!(config.wordle.defaults.word_list, "German");
        // unset keys keep their defaults
        assert_eq!(config.wordle.defaults.guess_list, "Wordle-all");
        assert_eq!(config.wordle.defaults.min_length, 5);
        assert_eq!(config.wordle.lists.len(), 1);
        assert_eq!(config.wordle.lists[0].language, "de");
        assert!(config.bot.activity().is_some());
    }

    #[test]
    fn bad_values_fail_to_parse() {
        let path = write_config(
            "bad",
            r#"
            [wordle]
            style = "sparkly"
            "#,
        );

        let result = Config::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn token_is_not_printed() {
        let path = write_config(
            "token",
            r#"
            [bot]
            token = "super secret"
            "#,
        );

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.bot.token().unwrap(), "super secret");
        assert!(!toml::to_string(&config).unwrap().contains("super secret"));
    }
}
