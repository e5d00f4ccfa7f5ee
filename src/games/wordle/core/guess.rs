use std::fmt;

/// Outcome of scoring one letter of a guess.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    WrongPosition,
    #[default]
    Incorrect,
}

impl LetterState {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "O",
            Self::WrongPosition => "o",
            Self::Incorrect => ".",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessedLetter {
    letter: char,
    state: LetterState,
}

impl GuessedLetter {
    pub(super) const fn new(letter: char, state: LetterState) -> Self {
        Self { letter, state }
    }

    pub const fn letter(&self) -> char {
        self.letter
    }

    pub const fn state(&self) -> LetterState {
        self.state
    }
}

/// A scored guess. Only [`Word::guess`](super::Word::guess) builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<GuessedLetter>,
}

impl Guess {
    pub(super) fn new(letters: Vec<GuessedLetter>) -> Self {
        Self { letters }
    }

    pub fn is_correct(&self) -> bool {
        self.letters.iter().all(|letter| letter.state.is_correct())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuessedLetter> + '_ {
        self.letters.iter()
    }

    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.letters.iter().map(GuessedLetter::state)
    }
}

/// Compact form: `O` correct, `o` wrong position, `.` incorrect.
impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters
            .iter()
            .try_for_each(|letter| write!(f, "{}", letter.state))
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}
