use crate::past_answers::*;
use crate::results::WordleError;
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in a Wordle word.
pub const WORD_LENGTH: usize = 5;

/// Returns `true` iff the token belongs in the dictionary.
///
/// Kept words are made of ASCII letters only, have exactly `word_length` letters, and don't start
/// with a capital letter (which excludes proper nouns and acronyms).
///
/// ```
/// use wordle_dictionary::keep_word;
///
/// assert!(keep_word("apple", 5));
/// assert!(!keep_word("Apple", 5));
/// assert!(!keep_word("abc1e", 5));
/// ```
pub fn keep_word(token: &str, word_length: usize) -> bool {
    token.is_ascii()
        && token.chars().all(|letter| letter.is_ascii_alphabetic())
        && token.len() == word_length
        && !token.starts_with(|letter: char| letter.is_ascii_uppercase())
}

/// Reads the raw word list, one token per line, keeping only tokens that pass [`keep_word`].
pub fn load_dictionary<R: BufRead>(
    word_reader: R,
    word_length: usize,
) -> io::Result<HashSet<String>> {
    word_reader
        .lines()
        .filter(|maybe_word| {
            maybe_word
                .as_ref()
                .map_or(true, |word| keep_word(word, word_length))
        })
        .collect()
}

/// Reads a plain word list, one word per line. Surrounding whitespace is removed.
pub fn load_word_list<R: BufRead>(word_reader: R) -> io::Result<Vec<String>> {
    word_reader
        .lines()
        .map(|maybe_word| maybe_word.map(|word| word.trim().to_string()))
        .collect()
}

/// Where the dictionary comes from and how it is curated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DictionaryConfig {
    /// The raw word list, with one word on each line.
    pub source_path: PathBuf,
    /// Words to remove from the dictionary, with one word on each line.
    pub exclude_path: Option<PathBuf>,
    /// The page listing past answers.
    pub past_answers_url: String,
    /// The maximum time to wait for the past answers page.
    pub fetch_timeout: Duration,
    pub word_length: usize,
}

impl Default for DictionaryConfig {
    fn default() -> DictionaryConfig {
        DictionaryConfig {
            source_path: PathBuf::new(),
            exclude_path: None,
            past_answers_url: DEFAULT_PAST_ANSWERS_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            word_length: WORD_LENGTH,
        }
    }
}

/// Builds the sorted list of candidate words.
///
/// Building loads the raw word list, removes every past answer, then removes every word in the
/// exclusion list (if there is one). Failing to fetch the past answers fails the build, so that
/// used answers never end up in the dictionary by accident.
pub struct DictionaryBuilder {
    source_path: PathBuf,
    exclude_path: Option<PathBuf>,
    word_length: usize,
    past_answers: Box<dyn PastAnswerSource>,
}

impl DictionaryBuilder {
    /// Creates a builder that fetches past answers from the configured page.
    pub fn from_config(config: &DictionaryConfig) -> Result<DictionaryBuilder, WordleError> {
        let fetcher = PastAnswerFetcher::new(&config.past_answers_url, config.fetch_timeout)?;
        Ok(DictionaryBuilder::new(
            &config.source_path,
            config.exclude_path.as_deref(),
            config.word_length,
            fetcher,
        ))
    }

    /// Creates a builder with the given source of past answers.
    ///
    /// An empty `exclude_path` is the same as no exclusion list.
    pub fn new(
        source_path: impl AsRef<Path>,
        exclude_path: Option<&Path>,
        word_length: usize,
        past_answers: impl PastAnswerSource + 'static,
    ) -> DictionaryBuilder {
        DictionaryBuilder {
            source_path: source_path.as_ref().to_path_buf(),
            exclude_path: exclude_path
                .filter(|path| !path.as_os_str().is_empty())
                .map(Path::to_path_buf),
            word_length,
            past_answers: Box::new(past_answers),
        }
    }

    /// Builds the dictionary, sorted in ascending order.
    pub fn build(&self) -> Result<Vec<Arc<str>>, WordleError> {
        let source = File::open(&self.source_path).map_err(|source| WordleError::SourceNotFound {
            path: self.source_path.clone(),
            source,
        })?;
        let mut words = load_dictionary(BufReader::new(source), self.word_length).map_err(
            |source| WordleError::Read {
                path: self.source_path.clone(),
                source,
            },
        )?;
        info!(
            "Loaded {} words from {}",
            words.len(),
            self.source_path.display()
        );

        let past_answers = self.past_answers.fetch()?;
        for answer in &past_answers {
            words.remove(answer);
        }
        info!(
            "{} words left after removing {} past answers",
            words.len(),
            past_answers.len()
        );

        match &self.exclude_path {
            Some(exclude_path) => {
                let excluded = read_exclusions(exclude_path)?;
                for word in &excluded {
                    words.remove(word);
                }
                info!(
                    "{} words left after removing {} words listed in {}",
                    words.len(),
                    excluded.len(),
                    exclude_path.display()
                );
            }
            None => info!("No exclusion list"),
        }

        let mut words: Vec<String> = words.into_iter().collect();
        words.sort_unstable();
        Ok(words.into_iter().map(Arc::from).collect())
    }
}

fn read_exclusions(path: &Path) -> Result<Vec<String>, WordleError> {
    let file = File::open(path).map_err(|source| WordleError::ExcludeNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_word_list(BufReader::new(file)).map_err(|source| WordleError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the dictionary once, for callers that don't need to reload it.
pub fn build_dictionary(config: &DictionaryConfig) -> Result<Vec<Arc<str>>, WordleError> {
    DictionaryBuilder::from_config(config)?.build()
}
