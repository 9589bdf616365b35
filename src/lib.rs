//! Endless Runner - side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, generation, run state)
//! - `platform`: Clock, input and storage adapters at the host boundary
//! - `highscores`: Best-score store contract
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::{MemoryScoreStore, ScoreStore};
pub use tuning::{Integration, Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Viewport dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Frame duration the per-tick physics constants were tuned at (60 FPS)
    pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Largest step a wall clock may report (stalls are clamped to this)
    pub const MAX_FRAME_MS: u32 = 100;

    /// Player body (visual box)
    pub const PLAYER_WIDTH: f32 = 150.0;
    pub const PLAYER_HEIGHT: f32 = 200.0;
    pub const PLAYER_START_X: f32 = 100.0;
    /// Horizontal speed while a direction key is held (pixels/tick)
    pub const MOVE_SPEED: f32 = 7.0;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 1.0;
    /// Initial vertical velocity of both jumps (negative is up)
    pub const JUMP_POWER: f32 = -18.0;

    /// Collision box as a fraction of the visual box
    pub const COLLISION_WIDTH_RATIO: f32 = 0.7;
    pub const COLLISION_HEIGHT_RATIO: f32 = 0.8;
    /// Transparent rows below the run sprite's feet (14) plus a 1px nudge
    pub const FOOT_OFFSET: f32 = 15.0;

    /// World scroll speed (pixels/second, time-based)
    pub const SCROLL_SPEED_PX_PER_SEC: f32 = 360.0;

    /// Platform generation
    pub const PLATFORM_WIDTH: f32 = 120.0;
    pub const GROUND_BASE_HEIGHT: u32 = 80;
    pub const PLATFORM_HEIGHT_MIN: u32 = 60;
    pub const PLATFORM_HEIGHT_MAX: u32 = 140;
    pub const GAP_MIN: u32 = 100;
    pub const GAP_MAX: u32 = 250;
    /// Off-screen distance kept populated on both sides of the viewport
    pub const LOOKAHEAD_BUFFER_PX: f32 = SCREEN_WIDTH;

    /// Double-jump pickup
    pub const PICKUP_RADIUS: f32 = 18.0;
    pub const PICKUP_FIRST_THRESHOLD: u64 = 10;
    pub const PICKUP_SPAWN_INCREMENT: u64 = 10;
    /// Spawn distance beyond the right edge of the viewport
    pub const PICKUP_SPAWN_MARGIN: f32 = 200.0;
    /// Spawn height above the base ground line
    pub const PICKUP_HEIGHT_OFFSET: f32 = 150.0;

    /// Score: one point per this many milliseconds of play
    pub const SCORE_INTERVAL_MS: u32 = 1000;
}
