use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::games::wordle::{
    AlphabetSource, Catalog, DefaultSettings, GameStyle, LoadError, WordListSource,
};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct WordleConfig {
    pub lists_dir: PathBuf,
    pub style: GameStyle,
    pub defaults: DefaultSettings,
    pub lists: Vec<WordListSource>,
    pub alphabets: Vec<AlphabetSource>,
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            lists_dir: "./wordLists".into(),
            style: GameStyle::default(),
            defaults: DefaultSettings::default(),
            lists: WordListSource::defaults(),
            alphabets: AlphabetSource::defaults(),
        }
    }
}

impl WordleConfig {
    pub fn load_catalog(&self) -> Result<Catalog, LoadError> {
        Catalog::load(&self.lists_dir, &self.lists, &self.alphabets)
    }
}
