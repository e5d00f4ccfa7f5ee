use std::sync::Arc;

use tracing::{info, instrument};

use super::Config;
use crate::{
    errors::Error,
    games::wordle::{Catalog, GamesCache, Settings},
};

/// Shared state handed to every event.
#[derive(Debug, Clone)]
pub struct Data {
    pub(crate) config: Config,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) games: GamesCache,
}

impl Data {
    pub fn new(config: Config, catalog: Catalog) -> Result<Self, Error> {
        let defaults = Settings::from_defaults(&catalog, &config.wordle.defaults)?;

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            games: GamesCache::new(defaults),
        })
    }

    /// Reads every word list and checks the default settings against them.
    #[instrument(name = "data", skip_all)]
    pub fn load(config: Config) -> Result<Self, Error> {
        let catalog = config.wordle.load_catalog()?;
        let data = Self::new(config, catalog)?;

        info!(
            lists = data.catalog.lists().count(),
            alphabets = data.catalog.alphabets().count(),
            "ready"
        );

        Ok(data)
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
