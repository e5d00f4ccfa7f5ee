use std::{collections::HashMap, fmt};

use tracing::trace;

use super::guess::{Guess, GuessedLetter, LetterState};

/// The secret word of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<char>,
    letter_counts: HashMap<char, usize>,
}

impl Word {
    pub fn new(word: &str) -> Self {
        let letters: Vec<char> = word.chars().collect();

        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for letter in &letters {
            *letter_counts.entry(*letter).or_default() += 1;
        }

        Self {
            letters,
            letter_counts,
        }
    }

    /// Number of characters, not bytes.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// Scores `word` against this one.
    ///
    /// Exact matches are taken out of the letter counts first, then the
    /// remaining letters are handed out left to right as wrong-position
    /// hints until each letter's count runs out.
    pub fn guess(&self, word: &str) -> Guess {
        let guessed: Vec<char> = word.chars().collect();
        let mut states = vec![LetterState::Incorrect; guessed.len()];
        let mut letter_counts = self.letter_counts.clone();

        for (index, (letter, answer)) in guessed.iter().zip(&self.letters).enumerate() {
            if letter == answer {
                states[index] = LetterState::Correct;

                if let Some(count) = letter_counts.get_mut(letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (letter, state) in guessed.iter().zip(states.iter_mut()) {
            if *state != LetterState::Incorrect {
                continue;
            }

            if let Some(count) = letter_counts.get_mut(letter).filter(|count| **count > 0) {
                trace!(%letter, "wrong position");

                *state = LetterState::WrongPosition;
                *count -= 1;
            }
        }

        Guess::new(
            guessed
                .into_iter()
                .zip(states)
                .map(|(letter, state)| GuessedLetter::new(letter, state))
                .collect(),
        )
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters.iter().copied().eq(other.chars())
    }
}
