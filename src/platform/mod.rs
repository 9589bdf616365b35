//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks
//! - Input events
//! - Storage (best-score file natively, LocalStorage on web)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{InputState, Key};
pub use storage::{FileScoreStore, StorageError};
pub use time::{Clock, FixedClock, WallClock};
