use std::{collections::BTreeSet, sync::Arc};

use tracing::{debug, instrument};

use super::{
    core::{Guess, Word},
    error::GuessError,
    words_list::WordList,
};

/// Words a game accepts as guesses: the union of several word lists.
///
/// If every list is empty, any string of the right length is accepted.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    lists: Vec<Arc<WordList>>,
}

impl Vocabulary {
    pub fn new(lists: impl IntoIterator<Item = Arc<WordList>>) -> Self {
        Self {
            lists: lists.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|list| list.is_empty())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lists.iter().any(|list| list.contains(word))
    }
}

/// One puzzle: a secret word and the guesses made against it so far.
#[derive(Debug, Clone)]
pub struct Game {
    answer: Word,
    valid_letters: BTreeSet<char>,
    vocabulary: Vocabulary,
    guesses: Vec<Guess>,
    tried_letters: BTreeSet<char>,
    won: bool,
}

impl Game {
    pub fn new(answer: Word, valid_letters: BTreeSet<char>, vocabulary: Vocabulary) -> Self {
        Self {
            answer,
            valid_letters,
            vocabulary,
            guesses: Vec::new(),
            tried_letters: BTreeSet::new(),
            won: false,
        }
    }

    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn count_guesses(&self) -> usize {
        self.guesses.len()
    }

    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Scores `word` and records it. A rejected guess leaves the game as it was.
    #[instrument(skip(self), fields(guesses = self.guesses.len()))]
    pub fn guess(&mut self, word: &str) -> Result<&Guess, GuessError> {
        if self.won {
            return Err(GuessError::GameOver);
        }

        self.check_valid(word)?;

        let guess = self.answer.guess(word);
        self.tried_letters.extend(word.chars());
        self.won = guess.is_correct();

        debug!(result = %guess, won = self.won, "guess accepted");

        self.guesses.push(guess);
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    fn check_valid(&self, word: &str) -> Result<(), GuessError> {
        // the answer is always guessable, even if the settings changed under it
        if self.answer == *word {
            return Ok(());
        }

        let length = word.chars().count();
        if length != self.answer.len() {
            return Err(GuessError::LengthMismatch {
                expected: self.answer.len(),
                actual: length,
            });
        }

        let invalid: Vec<char> = word
            .chars()
            .filter(|letter| !self.valid_letters.contains(letter))
            .collect();
        if !invalid.is_empty() {
            return Err(GuessError::InvalidCharacter {
                guess: word.to_owned(),
                invalid,
            });
        }

        if !self.vocabulary.is_empty() && !self.vocabulary.contains(word) {
            return Err(GuessError::UnknownWord(word.to_owned()));
        }

        Ok(())
    }

    pub fn letters_not_tried(&self) -> Vec<char> {
        self.valid_letters
            .difference(&self.tried_letters)
            .copied()
            .collect()
    }

    pub fn letters_in_word(&self) -> Vec<char> {
        self.tried_letters
            .iter()
            .copied()
            .filter(|letter| self.answer.contains(*letter))
            .collect()
    }

    pub fn letters_not_in_word(&self) -> Vec<char> {
        self.tried_letters
            .iter()
            .copied()
            .filter(|letter| !self.answer.contains(*letter))
            .collect()
    }
}
