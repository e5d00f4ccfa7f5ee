use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::core::{Guess, LetterState};

/// How a board is drawn in chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum GameStyle {
    Colors,
    #[default]
    Letters,
    SpacedLetters,
}

impl FromStr for GameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "colors" | "colors_only" | "hidden" => Ok(Self::Colors),
            "letters" | "with_letters" => Ok(Self::Letters),
            "spaced" | "spaced_letters" | "with_spaces" | "letters_with_spaces" => {
                Ok(Self::SpacedLetters)
            }
            _ => Err(format!(
                "unknown style `{s}`, expected one of `colors`, `letters` or `spaced`"
            )),
        }
    }
}

impl TryFrom<String> for GameStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for GameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Colors => "colors",
            Self::Letters => "letters",
            Self::SpacedLetters => "spaced",
        })
    }
}

impl Serialize for GameStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;

    fn emoji_with_letters(&self) -> String {
        self.as_emoji().into()
    }

    fn emoji_with_letters_spaced(&self) -> String {
        self.emoji_with_letters()
    }

    fn emoji_with_style(&self, style: GameStyle) -> Cow<str> {
        match style {
            GameStyle::Colors => self.as_emoji(),
            GameStyle::Letters => self.emoji_with_letters().into(),
            GameStyle::SpacedLetters => self.emoji_with_letters_spaced().into(),
        }
    }
}

/// Regional indicator for `a..=z`, anything else is shown upper-cased.
impl AsEmoji for char {
    fn as_emoji(&self) -> Cow<str> {
        let alphabet_letters = 'a'..='z';
        let emoji_letters = '🇦'..='🇿';

        alphabet_letters
            .zip(emoji_letters)
            .find_map(|(letter, emoji)| (*self == letter).then_some(emoji))
            .map_or_else(
                || self.to_uppercase().collect::<String>().into(),
                |emoji| emoji.to_string().into(),
            )
    }
}

impl AsEmoji for LetterState {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",       // green square
            Self::WrongPosition => "🟨", // yellow square
            Self::Incorrect => "⬛",     // black square
        }
        .into()
    }
}

impl AsEmoji for Guess {
    fn as_emoji(&self) -> Cow<str> {
        self.states()
            .map(|state| state.as_emoji().into_owned())
            .collect::<String>()
            .into()
    }

    fn emoji_with_letters(&self) -> String {
        let (letters, states) = self.iter().fold(
            (String::new(), String::new()),
            |(letters, states), letter| {
                (
                    letters + "\u{200c}" /* zero-width non-joiner */ + &letter.letter().as_emoji(),
                    states + &letter.state().as_emoji(),
                )
            },
        );

        letters + "\n" + &states
    }

    fn emoji_with_letters_spaced(&self) -> String {
        let (letters, states) = self.iter().fold(
            (String::new(), String::new()),
            |(letters, states), letter| {
                (
                    letters + " " + &letter.letter().as_emoji(),
                    states + " " + &letter.state().as_emoji(),
                )
            },
        );

        letters.trim().to_owned() + "\n" + states.trim()
    }
}

impl AsEmoji for [Guess] {
    fn as_emoji(&self) -> Cow<str> {
        self.iter()
            .map(|g| g.as_emoji())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }

    fn emoji_with_letters(&self) -> String {
        self.iter()
            .map(|g| g.emoji_with_letters())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emoji_with_letters_spaced(&self) -> String {
        self.iter()
            .map(|g| g.emoji_with_letters_spaced())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
