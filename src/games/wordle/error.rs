use thiserror::Error;

/// A guess the game refused. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Start a new game before guessing!")]
    GameOver,

    #[error("Guess needs to be {expected} letters long!")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("`{guess}` contains invalid characters!")]
    InvalidCharacter { guess: String, invalid: Vec<char> },

    #[error("`{0}` is not a valid word!")]
    UnknownWord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingError {
    #[error("{name} is not a valid word list. Available word lists: {}", .available.join(", "))]
    UnknownWordList {
        name: String,
        available: Vec<String>,
    },

    #[error("{name} is not a valid alphabet. Available alphabets: {}", .available.join(", "))]
    UnknownAlphabet {
        name: String,
        available: Vec<String>,
    },

    #[error("Minimum length must be smaller than maximum length!")]
    LengthOrder { min: usize, max: usize },

    #[error("Length must be at least {}!", super::MIN_WORD_LENGTH)]
    LengthTooSmall(usize),

    #[error("Length must be {} or smaller!", super::MAX_WORD_LENGTH)]
    LengthTooLarge(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("There are no words to choose! Change the word list or length requirements!")]
pub struct NoCandidatesError {
    pub word_list: String,
    pub min_length: usize,
    pub max_length: usize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GuessError, SettingError};

    #[test]
    fn length_mismatch_names_expected_length() {
        let err = GuessError::LengthMismatch {
            expected: 5,
            actual: 3,
        };

        assert_eq!(err.to_string(), "Guess needs to be 5 letters long!");
    }

    #[test]
    fn unknown_list_names_choices() {
        let err = SettingError::UnknownWordList {
            name: "klingon".to_owned(),
            available: vec!["Wordle".to_owned(), "German".to_owned()],
        };

        assert_eq!(
            err.to_string(),
            "klingon is not a valid word list. Available word lists: Wordle, German"
        );
    }
}
