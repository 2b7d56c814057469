use crate::data::DictionaryBuilder;
use crate::results::WordleError;
use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::mem;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Supplies the current time for reload bookkeeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// The system's wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// An immutable view of the dictionary as it was after one successful build.
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    words: Vec<Arc<str>>,
    loaded_at: SystemTime,
}

impl Snapshot {
    pub fn new(words: Vec<Arc<str>>, loaded_at: SystemTime) -> Snapshot {
        Snapshot { words, loaded_at }
    }

    /// The words, sorted in ascending order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// When this snapshot finished building.
    pub fn loaded_at(&self) -> SystemTime {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Holds the current dictionary for a long-running service, and rebuilds it on request.
///
/// Readers get an `Arc<Snapshot>` that never changes underneath them. A reload builds the new
/// dictionary without holding the snapshot lock, so slow downloads never block readers; the lock
/// is only taken to swap in the finished snapshot. At most one reload runs at a time.
pub struct WordStore {
    builder: DictionaryBuilder,
    clock: Box<dyn Clock>,
    current: RwLock<Arc<Snapshot>>,
    reloading: Mutex<()>,
}

impl fmt::Debug for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStore")
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}

impl WordStore {
    /// Builds the initial dictionary. Fails if the build fails.
    pub fn new(builder: DictionaryBuilder) -> Result<WordStore, WordleError> {
        WordStore::with_clock(builder, SystemClock)
    }

    /// Like [`WordStore::new`], but reads reload times from the given clock.
    pub fn with_clock(
        builder: DictionaryBuilder,
        clock: impl Clock + 'static,
    ) -> Result<WordStore, WordleError> {
        let words = builder.build()?;
        let snapshot = Snapshot::new(words, clock.now());
        info!("Dictionary loaded: {} words available", snapshot.len());
        Ok(WordStore {
            builder,
            clock: Box::new(clock),
            current: RwLock::new(Arc::new(snapshot)),
            reloading: Mutex::new(()),
        })
    }

    /// Rebuilds the dictionary and swaps it in.
    ///
    /// If the build fails, the previous snapshot stays in place and the error is returned. A call
    /// made while another reload is running waits for it, then rebuilds again.
    pub fn reload(&self) -> Result<(), WordleError> {
        let _reloading = self.reloading.lock();
        self.rebuild()
    }

    /// Reloads only if the current snapshot is older than `max_age`, returning whether it did.
    ///
    /// If another reload is already running, this returns `Ok(false)` right away rather than
    /// queueing a second rebuild.
    pub fn reload_if_stale(&self, max_age: Duration) -> Result<bool, WordleError> {
        if !self.should_reload(max_age) {
            return Ok(false);
        }
        let Some(_reloading) = self.reloading.try_lock() else {
            return Ok(false);
        };
        // Another caller may have finished a reload between the check and the lock.
        if !self.should_reload(max_age) {
            return Ok(false);
        }
        self.rebuild().map(|()| true)
    }

    fn rebuild(&self) -> Result<(), WordleError> {
        info!("Reloading dictionary");
        let words = self.builder.build().map_err(|err| {
            warn!("Failed to reload dictionary, keeping the previous one: {}", err);
            err
        })?;
        let snapshot = Arc::new(Snapshot::new(words, self.clock.now()));
        info!(
            "Dictionary reloaded: {} words available (last reload: {:?})",
            snapshot.len(),
            snapshot.loaded_at()
        );
        let previous = mem::replace(&mut *self.current.write(), snapshot);
        // Freed outside the write lock, unless a reader still holds it.
        drop(previous);
        Ok(())
    }

    /// Returns the current snapshot. Later reloads don't affect it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Returns the number of words in the current snapshot.
    pub fn count(&self) -> usize {
        self.current.read().len()
    }

    /// Returns the time of the last successful load.
    pub fn last_reload(&self) -> SystemTime {
        self.current.read().loaded_at()
    }

    /// Returns `true` if the current snapshot is older than `max_age`.
    ///
    /// If the clock has gone backwards since the last load, the snapshot counts as fresh.
    pub fn should_reload(&self, max_age: Duration) -> bool {
        self.clock
            .now()
            .duration_since(self.last_reload())
            .map_or(false, |age| age > max_age)
    }
}
