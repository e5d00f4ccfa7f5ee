use std::{ops::RangeInclusive, sync::Arc};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    error::{NoCandidatesError, SettingError},
    game::{Game, Vocabulary},
    words_list::{Alphabet, Catalog, WordList},
    MAX_WORD_LENGTH, MIN_WORD_LENGTH,
};

/// Allowed lengths for new secret words, `1 <= min <= max <= 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, SettingError> {
        if min > max {
            Err(SettingError::LengthOrder { min, max })
        } else if min < MIN_WORD_LENGTH {
            Err(SettingError::LengthTooSmall(min))
        } else if max > MAX_WORD_LENGTH {
            Err(SettingError::LengthTooLarge(max))
        } else {
            Ok(Self { min, max })
        }
    }

    pub const fn min(self) -> usize {
        self.min
    }

    pub const fn max(self) -> usize {
        self.max
    }

    pub fn contains(self, length: usize) -> bool {
        self.range().contains(&length)
    }

    pub fn range(self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Default selections, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultSettings {
    pub word_list: String,
    pub guess_list: String,
    pub alphabet: String,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            word_list: "Wordle".to_owned(),
            guess_list: "Wordle-all".to_owned(),
            alphabet: "English".to_owned(),
            min_length: 4,
            max_length: 6,
        }
    }
}

/// Per-channel game settings. Changing them never touches a running game.
#[derive(Debug, Clone)]
pub struct Settings {
    word_list: Arc<WordList>,
    guess_list: Arc<WordList>,
    alphabet: Arc<Alphabet>,
    length: LengthBounds,
}

impl Settings {
    pub fn from_defaults(catalog: &Catalog, defaults: &DefaultSettings) -> Result<Self, SettingError> {
        Ok(Self {
            word_list: catalog.word_list(&defaults.word_list)?,
            guess_list: catalog.word_list(&defaults.guess_list)?,
            alphabet: catalog.alphabet(&defaults.alphabet)?,
            length: LengthBounds::new(defaults.min_length, defaults.max_length)?,
        })
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    pub fn guess_list(&self) -> &WordList {
        &self.guess_list
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub const fn length(&self) -> LengthBounds {
        self.length
    }

    pub fn set_word_list(&mut self, catalog: &Catalog, name: &str) -> Result<&WordList, SettingError> {
        self.word_list = catalog.word_list(name)?;
        info!(list = %self.word_list.name(), "word list changed");

        Ok(self.word_list.as_ref())
    }

    pub fn set_guess_list(&mut self, catalog: &Catalog, name: &str) -> Result<&WordList, SettingError> {
        self.guess_list = catalog.word_list(name)?;
        info!(list = %self.guess_list.name(), "guess list changed");

        Ok(self.guess_list.as_ref())
    }

    pub fn set_alphabet(&mut self, catalog: &Catalog, name: &str) -> Result<&Alphabet, SettingError> {
        self.alphabet = catalog.alphabet(name)?;
        info!(alphabet = %self.alphabet.name(), "alphabet changed");

        Ok(self.alphabet.as_ref())
    }

    pub fn set_length(&mut self, min: usize, max: usize) -> Result<LengthBounds, SettingError> {
        self.length = LengthBounds::new(min, max)?;
        info!(min, max, "length changed");

        Ok(self.length)
    }

    /// Starts a game with a fresh secret word from the current word list.
    pub fn new_game(&self, rng: &mut impl Rng) -> Result<Game, NoCandidatesError> {
        let answer = self
            .word_list
            .select_target(self.length, &self.alphabet, rng)?;

        debug!(%answer, "picked secret word");

        let vocabulary = Vocabulary::new([self.guess_list.clone(), self.word_list.clone()]);

        Ok(Game::new(answer, self.alphabet.letters().clone(), vocabulary))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{DefaultSettings, LengthBounds, Settings};
    use crate::games::wordle::{error::SettingError, words_list::tests::catalog};

    fn settings() -> Settings {
        Settings::from_defaults(&catalog(), &DefaultSettings::default()).unwrap()
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            LengthBounds::new(3, 2),
            Err(SettingError::LengthOrder { min: 3, max: 2 })
        );
        assert_eq!(LengthBounds::new(0, 5), Err(SettingError::LengthTooSmall(0)));
        assert_eq!(LengthBounds::new(5, 21), Err(SettingError::LengthTooLarge(21)));

        let bounds = LengthBounds::new(1, 20).unwrap();
        assert!(bounds.contains(1));
        assert!(bounds.contains(20));
        assert!(!bounds.contains(21));

        assert_eq!(LengthBounds::new(5, 5).unwrap().range(), 5..=5);
    }

    #[test]
    fn rejected_length_keeps_previous() {
        let mut settings = settings();

        let err = settings.set_length(3, 2).unwrap_err();
        assert_eq!(err.to_string(), "Minimum length must be smaller than maximum length!");
        assert_eq!(settings.length(), LengthBounds::new(4, 6).unwrap());

        settings.set_length(5, 5).unwrap();
        assert_eq!(settings.length(), LengthBounds::new(5, 5).unwrap());
    }

    #[test]
    fn setters_look_up_catalog() {
        let catalog = catalog();
        let mut settings = settings();

        assert_eq!(settings.set_word_list(&catalog, "GERMAN").unwrap().name(), "German");
        assert_eq!(settings.set_guess_list(&catalog, "wordle").unwrap().name(), "Wordle");
        assert_eq!(settings.set_alphabet(&catalog, "german").unwrap().name(), "German");

        assert!(settings.set_word_list(&catalog, "nope").is_err());
        assert_eq!(settings.word_list().name(), "German");
    }

    #[test]
    fn bad_defaults_are_rejected() {
        let defaults = DefaultSettings {
            alphabet: "Runes".to_owned(),
            ..DefaultSettings::default()
        };

        assert!(matches!(
            Settings::from_defaults(&catalog(), &defaults),
            Err(SettingError::UnknownAlphabet { .. })
        ));
    }

    #[test]
    fn new_game_uses_settings() {
        let mut settings = settings();
        settings.set_length(5, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let game = settings.new_game(&mut rng).unwrap();
        assert_eq!(game.answer().len(), 5);

        settings.set_length(7, 9).unwrap();
        assert!(settings.new_game(&mut rng).is_err());
    }
}
