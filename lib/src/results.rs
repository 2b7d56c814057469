use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Indicates that an error occurred while building the dictionary or reading clues.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The raw word list could not be opened.
    #[error("could not open word list {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An exclusion list was configured, but could not be opened.
    #[error("could not open exclusion list {}: {source}", path.display())]
    ExcludeNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file was opened but reading a line from it failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The past answers page could not be retrieved.
    #[error("failed to fetch past answers from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The past answers page did not respond within the configured timeout.
    #[error("timed out after {timeout:?} fetching past answers from {url}")]
    FetchTimeout { url: String, timeout: Duration },
    /// The past answers page was retrieved but could not be read as a document.
    #[error("failed to parse past answers page from {url}: {reason}")]
    Parse { url: String, reason: String },
    /// Fewer clue tokens were given than the word has letters (plus the missed letters).
    #[error("expected at least {expected} clue tokens, got {actual}")]
    TooFewArguments { expected: usize, actual: usize },
    /// More positional clue tokens were given than the word has letters.
    #[error("expected at most {expected} clue tokens, got {actual}")]
    TooManyArguments { expected: usize, actual: usize },
    /// A positional clue token could not be interpreted.
    #[error("invalid clue {token:?} at position {position}: {reason}")]
    InvalidClueToken {
        position: usize,
        token: String,
        reason: &'static str,
    },
}
