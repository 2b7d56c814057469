use crate::restrictions::{LettersNotAt, LocatedLetter, WordRestrictions};
use crate::results::WordleError;
use log::debug;

/// Marks a position where nothing is known.
const UNKNOWN_TOKEN: &str = ".";
/// Prefixes the letters that are in the word but not at this position.
const NOT_HERE_PREFIX: char = '-';

/// Parses the missed letters and one token per letter position into [`WordRestrictions`].
///
/// Each position token is one of:
///
///  * `.`: nothing is known about this position.
///  * `-xy`: the letters `x` and `y` are in the word, but not at this position.
///  * `x`: the letter `x` is at this position. Only the first character is used.
///
/// Tokens are used exactly as given, so callers should normalize case first.
///
/// ```
/// use wordle_dictionary::*;
///
/// let restrictions = parse_clues("rt", &["-a", "e", ".", ".", "."], 5).unwrap();
///
/// assert!(restrictions.is_satisfied_by("beach"));
/// assert!(!restrictions.is_satisfied_by("react"));
/// ```
pub fn parse_clues<S: AsRef<str>>(
    missed: &str,
    positions: &[S],
    word_length: usize,
) -> Result<WordRestrictions, WordleError> {
    if positions.len() < word_length {
        return Err(WordleError::TooFewArguments {
            expected: word_length + 1,
            actual: positions.len() + 1,
        });
    }
    if positions.len() > word_length {
        return Err(WordleError::TooManyArguments {
            expected: word_length + 1,
            actual: positions.len() + 1,
        });
    }

    let mut restrictions = WordRestrictions::new();
    restrictions.must_not_contain.extend(missed.chars());
    for (index, token) in positions.iter().enumerate() {
        let token = token.as_ref();
        if token == UNKNOWN_TOKEN {
            continue;
        }
        if let Some(letters) = token.strip_prefix(NOT_HERE_PREFIX) {
            if letters.is_empty() {
                return Err(invalid_token(index, token, "no letters after '-'"));
            }
            restrictions
                .must_contain_but_not_here
                .push(LettersNotAt::new(index, letters.chars()));
        } else {
            let letter = token
                .chars()
                .next()
                .ok_or_else(|| invalid_token(index, token, "empty clue"))?;
            restrictions
                .must_contain_here
                .push(LocatedLetter::new(letter, index));
        }
    }
    debug!("Parsed clues: {:?}", restrictions);
    Ok(restrictions)
}

/// Parses a whitespace-separated line of the form `missed p0 p1 .. pN`.
///
/// See [`parse_clues`] for the meaning of each position token.
pub fn parse_command_line(line: &str, word_length: usize) -> Result<WordRestrictions, WordleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.split_first() {
        Some((missed, positions)) => parse_clues(missed, positions, word_length),
        None => Err(WordleError::TooFewArguments {
            expected: word_length + 1,
            actual: 0,
        }),
    }
}

fn invalid_token(position: usize, token: &str, reason: &'static str) -> WordleError {
    WordleError::InvalidClueToken {
        position,
        token: token.to_string(),
        reason,
    }
}
