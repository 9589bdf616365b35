//! Best-score store
//!
//! The simulation reads and writes the best score only through
//! [`ScoreStore`], once per death. Stores never fail loudly: an unreadable
//! store reports 0 and a failed write is dropped.

/// Persistence for the single best score
pub trait ScoreStore {
    /// Best score so far, 0 if none or unreadable
    fn load(&self) -> u64;
    /// Best-effort write
    fn store(&mut self, score: u64);
}

/// Result of submitting a finished run's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Best score after this submission
    pub best: u64,
    /// This run set the best score
    pub new_best: bool,
}

/// Compare `score` against the stored best and write it if it beats it
pub fn submit_score<S: ScoreStore + ?Sized>(store: &mut S, score: u64) -> Submission {
    let best = store.load();
    if score > best {
        store.store(score);
        log::info!("New best score: {} (was {})", score, best);
        Submission {
            best: score,
            new_best: true,
        }
    } else {
        Submission {
            best,
            new_best: false,
        }
    }
}

/// In-memory store, counting accesses
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: u64,
    pub loads: std::cell::Cell<u32>,
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u64) -> Self {
        Self {
            best,
            ..Default::default()
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u64 {
        self.loads.set(self.loads.get() + 1);
        self.best
    }

    fn store(&mut self, score: u64) {
        self.writes += 1;
        self.best = score;
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn store(&mut self, score: u64) {
        (**self).store(score)
    }
}
