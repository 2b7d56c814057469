use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A letter along with its location in the word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: usize,
}

impl LocatedLetter {
    pub fn new(letter: char, location: usize) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Letters that are somewhere in the word, but not at the given location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LettersNotAt {
    /// The zero-based location that none of these letters may occupy.
    pub location: usize,
    pub letters: Vec<char>,
}

impl LettersNotAt {
    pub fn new(location: usize, letters: impl IntoIterator<Item = char>) -> LettersNotAt {
        LettersNotAt {
            location,
            letters: letters.into_iter().collect(),
        }
    }
}

/// Defines letter restrictions that a word must adhere to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordRestrictions {
    /// Letters that must not be in the word.
    pub must_not_contain: HashSet<char>,
    /// Letters that must occur in specific locations in the word.
    pub must_contain_here: Vec<LocatedLetter>,
    /// Letters that must be present, but must be somewhere else in the word.
    pub must_contain_but_not_here: Vec<LettersNotAt>,
}

impl WordRestrictions {
    /// Creates a new empty `WordRestrictions`, which every word satisfies.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns true if there are no restrictions at all.
    pub fn is_empty(&self) -> bool {
        self.must_not_contain.is_empty()
            && self.must_contain_here.is_empty()
            && self.must_contain_but_not_here.is_empty()
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    ///
    /// Checks run in order: missed letters, then located letters, then letters that must be
    /// elsewhere. The first failing check rejects the word.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        !word
            .chars()
            .any(|letter| self.must_not_contain.contains(&letter))
            && self
                .must_contain_here
                .iter()
                .all(|ll| letter_at(word, ll.location) == Some(ll.letter))
            && self.must_contain_but_not_here.iter().all(|not_at| {
                not_at.letters.iter().all(|letter| {
                    word.contains(*letter) && letter_at(word, not_at.location) != Some(*letter)
                })
            })
    }
}

fn letter_at(word: &str, location: usize) -> Option<char> {
    word.chars().nth(location)
}

/// Gets the words that meet the given restrictions, in the same order as they were given.
pub fn make_candidates(words: &[Arc<str>], restrictions: &WordRestrictions) -> Vec<Arc<str>> {
    words
        .par_iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}
