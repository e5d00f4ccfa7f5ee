mod word;
pub use word::Word;

mod guess;
pub use guess::{Guess, LetterState};
