use thiserror::Error;

/// First words the bot listens to. Everything else is ignored.
pub const TRIGGERS: &[&str] = &[
    "wort",
    "word",
    "wortle",
    "wordle",
    "wortlerino",
    "wordlerino",
    "w",
    "neu",
    "new",
    "nochmal",
    "again",
    "next",
    "guess",
    "n",
    "set",
];

const WORD_LIST: &[&str] = &["wordlist", "word_list", "words", "wl", "w", "worte", "wörter"];
const GUESS_LIST: &[&str] = &["guesslist", "guess_list", "guess", "guesses", "gl", "g"];
const ALPHABET: &[&str] = &["alphabet", "letters", "buchstaben", "characters"];
const LENGTH: &[&str] = &["length", "size", "länge", "l"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Guess(String),
    SetWordList(String),
    SetGuessList(String),
    SetAlphabet(String),
    SetLength { min: usize, max: Option<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("New length must be a number!")]
    LengthNotNumber,

    #[error("Not a valid setting. Try word_list, guess_list, or length!")]
    UnknownSetting,

    #[error("Too many words!")]
    TooManyWords,
}

fn length(arg: &str) -> Result<usize, ParseError> {
    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::LengthNotNumber);
    }

    // digits only, so a failed parse is an overflow
    Ok(arg.parse().unwrap_or(usize::MAX))
}

impl Command {
    /// `None` if the message isn't addressed to the bot at all.
    pub fn parse(message: &str) -> Option<Result<Self, ParseError>> {
        let words: Vec<&str> = message.split_whitespace().collect();

        let trigger = words.first()?.to_lowercase();
        if !TRIGGERS.contains(&trigger.as_str()) {
            return None;
        }

        let setting = words.get(1).map(|word| word.to_lowercase());
        let is = |aliases: &[&str]| setting.as_deref().is_some_and(|s| aliases.contains(&s));

        Some(match words.as_slice() {
            [_] => Ok(Self::NewGame),
            [_, guess] => Ok(Self::Guess(guess.to_lowercase())),
            [_, _, value] if is(WORD_LIST) => Ok(Self::SetWordList((*value).to_owned())),
            [_, _, value] if is(GUESS_LIST) => Ok(Self::SetGuessList((*value).to_owned())),
            [_, _, value] if is(ALPHABET) => Ok(Self::SetAlphabet((*value).to_owned())),
            [_, _, value] if is(LENGTH) => length(value).map(|min| Self::SetLength { min, max: None }),
            [_, _, min, max] if is(LENGTH) => length(min)
                .and_then(|min| length(max).map(|max| Self::SetLength { min, max: Some(max) })),
            [_, _, _] | [_, _, _, _] => Err(ParseError::UnknownSetting),
            _ => Err(ParseError::TooManyWords),
        })
    }
}
