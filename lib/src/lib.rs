//! Narrows a Wordle dictionary down to the words that still fit your clues.
//!
//! The dictionary is curated from a raw word list by [`DictionaryBuilder`], which drops words
//! that can't be answers, words that were already used as answers, and words from an optional
//! exclusion list. Long-running services keep it in a [`WordStore`], which can be reloaded while
//! it is being read. Clues are parsed with [`parse_clues`] and applied with [`make_candidates`].
//!
//! ```no_run
//! use wordle_dictionary::*;
//!
//! let config = DictionaryConfig {
//!     source_path: "/usr/share/dict/words".into(),
//!     ..Default::default()
//! };
//! let store = WordStore::new(DictionaryBuilder::from_config(&config)?)?;
//!
//! let restrictions = parse_command_line("ertios -ag . -a -n .", WORD_LENGTH)?;
//! let candidates = make_candidates(store.snapshot().words(), &restrictions);
//! # Ok::<(), WordleError>(())
//! ```

mod clues;
mod data;
mod past_answers;
mod restrictions;
mod results;
mod store;
mod tree;

pub use clues::*;
pub use data::*;
pub use past_answers::*;
pub use restrictions::*;
pub use results::*;
pub use store::*;
pub use tree::*;
