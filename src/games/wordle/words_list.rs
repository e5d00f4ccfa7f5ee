use std::{
    collections::{BTreeSet, HashSet},
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::{
    core::Word,
    error::{NoCandidatesError, SettingError},
    settings::LengthBounds,
};

/// Where a word list comes from, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordListSource {
    pub name: String,
    pub file: PathBuf,
    pub description: String,
    pub language: String,
}

impl WordListSource {
    fn new(name: &str, file: &str, description: &str, language: &str) -> Self {
        Self {
            name: name.to_owned(),
            file: file.into(),
            description: description.to_owned(),
            language: language.to_owned(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Substantive",
                "substantive.txt",
                "Wenige (~100) deutsche Substantive",
                "de",
            ),
            Self::new(
                "German",
                "german.txt",
                "Deutsche Wörter (inklusive Flexionen)",
                "de",
            ),
            Self::new(
                "Wikipedia",
                "wiki.txt",
                "Liste der Titel aller deutschen Wikipedia-Artikel",
                "de",
            ),
            Self::new(
                "Wordle",
                "wordle-answers.txt",
                "All possible wordle words",
                "en",
            ),
            Self::new(
                "Wordle-all",
                "wordle-all.txt",
                "All possible wordle words + all words wordle accepts as input",
                "en",
            ),
            Self::new(
                "Spelunky",
                "spelunky.txt",
                "All words that appear anywhere in Spelunky 2",
                "en",
            ),
            Self::new(
                "English",
                "english.txt",
                "A few hundred thousand English words",
                "en",
            ),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlphabetSource {
    pub name: String,
    pub letters: String,
    pub description: String,
}

impl AlphabetSource {
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                name: "German".to_owned(),
                letters: "abcdefghijklmnopqrstuvwxyzäöüß".to_owned(),
                description: "Normales deutsches Alphabet".to_owned(),
            },
            Self {
                name: "English".to_owned(),
                letters: "abcdefghijklmnopqrstuvwxyz".to_owned(),
                description: "Standard English alphabet".to_owned(),
            },
        ]
    }
}

#[derive(Debug, Error)]
#[error("couldn't read word list {name} from {}: {source}", .path.display())]
pub struct LoadError {
    name: String,
    path: PathBuf,
    source: io::Error,
}

#[derive(Debug, Clone)]
pub struct WordList {
    key: String,
    name: String,
    description: String,
    language: String,
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordList {
    pub fn new<W>(name: &str, description: &str, language: &str, words: W) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lookup = words.iter().map(|word| word.to_lowercase()).collect();

        Self {
            key: name.to_lowercase(),
            name: name.to_owned(),
            description: description.to_owned(),
            language: language.to_owned(),
            words,
            lookup,
        }
    }

    /// One word per line. Whitespace around words and blank lines are dropped.
    pub fn from_lines(source: &WordListSource, text: &str) -> Self {
        Self::new(
            &source.name,
            &source.description,
            &source.language,
            text.lines().map(str::trim).filter(|line| !line.is_empty()),
        )
    }

    pub fn load(dir: &Path, source: &WordListSource) -> Result<Self, LoadError> {
        let path = dir.join(&source.file);

        let text = fs::read_to_string(&path).map_err(|source_err| LoadError {
            name: source.name.clone(),
            path: path.clone(),
            source: source_err,
        })?;

        let list = Self::from_lines(source, &text);
        info!(list = %list.name, words = list.len(), path = %path.display(), "loaded word list");

        Ok(list)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive, `word` is expected in lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    fn is_candidate(word: &str, bounds: LengthBounds, alphabet: &Alphabet) -> bool {
        // rejects acronyms and other oddly cased entries, title case is fine;
        // a word needs a lowercase tail, so single letters never qualify
        let mut rest = word.chars().skip(1).peekable();
        let cased = rest.peek().is_some() && rest.all(char::is_lowercase);

        cased
            && bounds.contains(word.chars().count())
            && word
                .chars()
                .flat_map(char::to_lowercase)
                .all(|letter| alphabet.contains(letter))
    }

    /// Picks a random secret word within `bounds` spelled only with `alphabet`.
    #[instrument(skip_all, fields(list = %self.name, min = bounds.min(), max = bounds.max(), alphabet = %alphabet.name))]
    pub fn select_target(
        &self,
        bounds: LengthBounds,
        alphabet: &Alphabet,
        rng: &mut impl Rng,
    ) -> Result<Word, NoCandidatesError> {
        let candidates: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| Self::is_candidate(word, bounds, alphabet))
            .collect();

        debug!(candidates = candidates.len());

        let word = candidates.choose(rng).ok_or_else(|| NoCandidatesError {
            word_list: self.name.clone(),
            min_length: bounds.min(),
            max_length: bounds.max(),
        })?;

        Ok(Word::new(&word.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    key: String,
    name: String,
    description: String,
    letters: BTreeSet<char>,
}

impl Alphabet {
    pub fn new(name: &str, description: &str, letters: &str) -> Self {
        Self {
            key: name.to_lowercase(),
            name: name.to_owned(),
            description: description.to_owned(),
            letters: letters.chars().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub const fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }
}

impl From<&AlphabetSource> for Alphabet {
    fn from(value: &AlphabetSource) -> Self {
        Self::new(&value.name, &value.description, &value.letters)
    }
}

/// Every word list and alphabet the bot knows about. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lists: Vec<Arc<WordList>>,
    alphabets: Vec<Arc<Alphabet>>,
}

impl Catalog {
    pub fn new(lists: Vec<WordList>, alphabets: Vec<Alphabet>) -> Self {
        Self {
            lists: lists.into_iter().map(Arc::new).collect(),
            alphabets: alphabets.into_iter().map(Arc::new).collect(),
        }
    }

    /// Reads every list from `dir`. Any unreadable file fails the whole load.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(
        dir: &Path,
        lists: &[WordListSource],
        alphabets: &[AlphabetSource],
    ) -> Result<Self, LoadError> {
        let lists = lists
            .iter()
            .map(|source| WordList::load(dir, source))
            .collect::<Result<Vec<_>, _>>()?;

        let alphabets = alphabets.iter().map(Alphabet::from).collect();

        info!("all word lists loaded");

        Ok(Self::new(lists, alphabets))
    }

    pub fn lists(&self) -> impl Iterator<Item = &Arc<WordList>> + '_ {
        self.lists.iter()
    }

    pub fn alphabets(&self) -> impl Iterator<Item = &Arc<Alphabet>> + '_ {
        self.alphabets.iter()
    }

    pub fn word_list(&self, name: &str) -> Result<Arc<WordList>, SettingError> {
        let key = name.to_lowercase();

        self.lists
            .iter()
            .find(|list| list.key == key)
            .cloned()
            .ok_or_else(|| SettingError::UnknownWordList {
                name: name.to_owned(),
                available: self.lists.iter().map(|list| list.name.clone()).collect(),
            })
    }

    pub fn alphabet(&self, name: &str) -> Result<Arc<Alphabet>, SettingError> {
        let key = name.to_lowercase();

        self.alphabets
            .iter()
            .find(|alphabet| alphabet.key == key)
            .cloned()
            .ok_or_else(|| SettingError::UnknownAlphabet {
                name: name.to_owned(),
                available: self
                    .alphabets
                    .iter()
                    .map(|alphabet| alphabet.name.clone())
                    .collect(),
            })
    }
}
