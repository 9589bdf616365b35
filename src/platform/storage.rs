//! Best-score storage backends
//!
//! Natively the best score is a plain decimal number in a text file. On the
//! web it lives in LocalStorage.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::ScoreStore;

/// Default best-score file name, relative to the working directory
pub const BEST_SCORE_FILE: &str = "best_score.txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} does not hold a score: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Best score kept in a text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score
    pub fn read(&self) -> Result<u64, StorageError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        text.trim().parse().map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the stored score
    pub fn write(&self, score: u64) -> Result<(), StorageError> {
        std::fs::write(&self.path, score.to_string()).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(BEST_SCORE_FILE)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u64 {
        match self.read() {
            Ok(score) => score,
            Err(StorageError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No best score at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("{e}, treating best score as 0");
                0
            }
        }
    }

    fn store(&mut self, score: u64) {
        match self.write(score) {
            Ok(()) => log::info!("Best score saved to {}", self.path.display()),
            Err(e) => log::warn!("{e}, best score not saved"),
        }
    }
}

/// Best score kept in browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalScoreStore;

#[cfg(target_arch = "wasm32")]
impl LocalScoreStore {
    const STORAGE_KEY: &'static str = "endless_runner_best_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalScoreStore {
    fn load(&self) -> u64 {
        Self::storage()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    fn store(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(Self::STORAGE_KEY, &score.to_string())
                .is_ok()
            {
                log::info!("Best score saved");
            }
        }
    }
}
