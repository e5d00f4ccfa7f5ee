pub mod wordle;
