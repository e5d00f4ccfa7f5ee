mod core;

mod error;
pub use error::{GuessError, NoCandidatesError, SettingError};

mod words_list;
pub use words_list::{AlphabetSource, Catalog, LoadError, WordListSource};

mod settings;
pub use settings::{DefaultSettings, Settings};

mod game;
pub use game::Game;

mod cache;
pub use cache::{ChannelState, GamesCache};

mod as_emoji;
pub use as_emoji::{AsEmoji, GameStyle};

pub const MIN_WORD_LENGTH: usize = 1;
pub const MAX_WORD_LENGTH: usize = 20;

#[cfg(test)]
pub(crate) use words_list::tests::catalog as test_catalog;
