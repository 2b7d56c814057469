#[macro_use]
extern crate assert_matches;

use wordle_dictionary::*;

use std::path::{Path, PathBuf};
use std::result::Result;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, SystemTime};

/// The number of valid words in `tests/data/words.txt`.
const NUM_WORDS: usize = 11;

fn words_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.txt")
}

/// Removes two past answers on every other build.
fn alternating_builder() -> DictionaryBuilder {
    let builds = AtomicUsize::new(0);
    DictionaryBuilder::new(
        words_path(),
        None,
        WORD_LENGTH,
        move || -> Result<Vec<String>, WordleError> {
            if builds.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                Ok(Vec::new())
            } else {
                Ok(vec!["aback".to_string(), "zesty".to_string()])
            }
        },
    )
}

#[test]
fn new_loads_dictionary() -> Result<(), WordleError> {
    let store = WordStore::new(alternating_builder())?;

    assert_eq!(store.count(), NUM_WORDS);
    assert_eq!(store.snapshot().len(), NUM_WORDS);
    assert_eq!(store.snapshot().loaded_at(), store.last_reload());
    Ok(())
}

#[test]
fn new_fails_when_build_fails() {
    let builder = DictionaryBuilder::new(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/missing.txt"),
        None,
        WORD_LENGTH,
        || -> Result<Vec<String>, WordleError> { Ok(Vec::new()) },
    );

    assert_matches!(
        WordStore::new(builder),
        Err(WordleError::SourceNotFound { .. })
    );
}

#[test]
fn reload_replaces_snapshot() -> Result<(), WordleError> {
    let store = WordStore::new(alternating_builder())?;
    let before = store.snapshot();

    store.reload()?;

    assert_eq!(before.len(), NUM_WORDS);
    assert_eq!(store.count(), NUM_WORDS - 2);
    assert!(!store
        .snapshot()
        .words()
        .iter()
        .any(|word| word.as_ref() == "aback" || word.as_ref() == "zesty"));
    Ok(())
}

#[test]
fn failed_reload_keeps_previous_snapshot() -> Result<(), WordleError> {
    let fail = Arc::new(AtomicBool::new(false));
    let builder = {
        let fail = Arc::clone(&fail);
        DictionaryBuilder::new(
            words_path(),
            None,
            WORD_LENGTH,
            move || -> Result<Vec<String>, WordleError> {
                if fail.load(Ordering::SeqCst) {
                    Err(WordleError::Parse {
                        url: "http://localhost/".to_string(),
                        reason: "not a page".to_string(),
                    })
                } else {
                    Ok(vec!["hello".to_string()])
                }
            },
        )
    };
    let store = WordStore::new(builder)?;
    let before = store.snapshot();

    fail.store(true, Ordering::SeqCst);

    assert_matches!(store.reload(), Err(WordleError::Parse { .. }));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.count(), NUM_WORDS - 1);

    fail.store(false, Ordering::SeqCst);
    store.reload()?;

    assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    Ok(())
}

#[test]
fn concurrent_snapshots_never_see_partial_reloads() -> Result<(), WordleError> {
    let store = WordStore::new(alternating_builder())?;
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::SeqCst) {
                    let snapshot = store.snapshot();
                    assert!(
                        snapshot.len() == NUM_WORDS || snapshot.len() == NUM_WORDS - 2,
                        "unexpected snapshot length {}",
                        snapshot.len()
                    );
                    assert!(snapshot.words().windows(2).all(|pair| pair[0] < pair[1]));
                    let count = store.count();
                    assert!(count == NUM_WORDS || count == NUM_WORDS - 2);
                }
            });
        }

        let reloads = scope.spawn(|| {
            let result = (0..50).try_for_each(|_| store.reload());
            done.store(true, Ordering::SeqCst);
            result
        });
        reloads.join().expect("reload thread panicked")
    })?;

    // 51 builds in total, and odd-numbered builds remove two words.
    assert_eq!(store.count(), NUM_WORDS);
    Ok(())
}

/// A clock that only moves when told to.
#[derive(Clone, Default)]
struct ManualClock {
    seconds: Arc<AtomicU64>,
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(self.seconds.load(Ordering::SeqCst))
    }
}

#[test]
fn concurrent_reload_if_stale_rebuilds_once() -> Result<(), WordleError> {
    let builds = Arc::new(AtomicUsize::new(0));
    let builder = {
        let builds = Arc::clone(&builds);
        DictionaryBuilder::new(
            words_path(),
            None,
            WORD_LENGTH,
            move || -> Result<Vec<String>, WordleError> {
                builds.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(50));
                Ok(Vec::new())
            },
        )
    };
    let clock = ManualClock::default();
    let store = WordStore::with_clock(builder, clock.clone())?;
    clock.seconds.store(100, Ordering::SeqCst);
    let start = &Barrier::new(8);
    let store = &store;

    let reloaded = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    start.wait();
                    store.reload_if_stale(Duration::from_secs(10))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reload thread panicked"))
            .collect::<Result<Vec<bool>, WordleError>>()
    })?;

    assert_eq!(reloaded.iter().filter(|reloaded| **reloaded).count(), 1);
    // One build in `new`, and one reload.
    assert_eq!(builds.load(Ordering::SeqCst), 2);
    assert_eq!(
        store.last_reload(),
        SystemTime::UNIX_EPOCH + Duration::from_secs(100)
    );
    Ok(())
}
