//! Data-driven game balance
//!
//! Every physics and generation constant the simulation reads lives in
//! [`Tuning`]. Tunings are plain JSON; missing fields take the defaults from
//! [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming a tuning file for the native binary
pub const TUNING_ENV_VAR: &str = "RUNNER_TUNING";

/// Narrowest platform the generator accepts (pixels)
const MIN_PLATFORM_WIDTH: f32 = 1.0;
/// Smallest distance between consecutive platform left edges (pixels)
const MIN_PLATFORM_STRIDE: f32 = 16.0;

/// How per-tick physics constants relate to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    /// Gravity, jump velocity and walking speed are applied once per tick,
    /// whatever the tick's duration. Matches the feel the constants were
    /// tuned for at 60 FPS; the world scroll stays time-based either way.
    #[default]
    PerTick,
    /// Player physics is scaled by `dt / reference_frame_ms`, so a slow
    /// frame moves the player as far as the equivalent number of 60 FPS
    /// frames would.
    TimeScaled,
}

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player physics ===
    pub gravity: f32,
    pub jump_power: f32,
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,
    /// Ground-alignment correction for the sprite's transparent padding
    pub foot_offset: f32,
    pub integration: Integration,
    pub reference_frame_ms: f32,

    // === World ===
    pub scroll_speed_px_per_sec: f32,
    pub platform_width: f32,
    pub ground_base_height: u32,
    pub gap_min: u32,
    pub gap_max: u32,
    pub platform_height_min: u32,
    pub platform_height_max: u32,
    pub lookahead_buffer_px: f32,

    // === Pickup ===
    pub pickup_radius: f32,
    pub pickup_first_threshold: u64,
    pub pickup_spawn_increment: u64,
    pub pickup_spawn_margin: f32,
    pub pickup_height_offset: f32,

    /// Run seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            move_speed: MOVE_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            foot_offset: FOOT_OFFSET,
            integration: Integration::PerTick,
            reference_frame_ms: REFERENCE_FRAME_MS,

            scroll_speed_px_per_sec: SCROLL_SPEED_PX_PER_SEC,
            platform_width: PLATFORM_WIDTH,
            ground_base_height: GROUND_BASE_HEIGHT,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            platform_height_min: PLATFORM_HEIGHT_MIN,
            platform_height_max: PLATFORM_HEIGHT_MAX,
            lookahead_buffer_px: LOOKAHEAD_BUFFER_PX,

            pickup_radius: PICKUP_RADIUS,
            pickup_first_threshold: PICKUP_FIRST_THRESHOLD,
            pickup_spawn_increment: PICKUP_SPAWN_INCREMENT,
            pickup_spawn_margin: PICKUP_SPAWN_MARGIN,
            pickup_height_offset: PICKUP_HEIGHT_OFFSET,

            seed: None,
        }
    }
}

impl Tuning {
    /// Parse a tuning from JSON and repair any inconsistent values
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load a tuning file, falling back to defaults if it is missing or
    /// unparseable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Self::default()
            }
        }
    }

    /// Repair values the generator and physics cannot work with: inverted
    /// ranges are swapped, sizes are kept positive, platforms keep a minimum
    /// stride and the ground band is kept inside the viewport.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.gap_min > self.gap_max {
            std::mem::swap(&mut self.gap_min, &mut self.gap_max);
        }
        if self.platform_height_min > self.platform_height_max {
            std::mem::swap(&mut self.platform_height_min, &mut self.platform_height_max);
        }

        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        self.screen_width = positive(self.screen_width, defaults.screen_width);
        self.screen_height = positive(self.screen_height, defaults.screen_height);
        self.player_width = positive(self.player_width, defaults.player_width);
        self.player_height = positive(self.player_height, defaults.player_height);
        self.platform_width = positive(self.platform_width, defaults.platform_width)
            .max(MIN_PLATFORM_WIDTH);
        // Keeps the field's platform count bounded
        let stride = self.platform_width + self.gap_min as f32;
        if stride < MIN_PLATFORM_STRIDE {
            self.platform_width = MIN_PLATFORM_STRIDE - self.gap_min as f32;
        }
        self.pickup_radius = positive(self.pickup_radius, defaults.pickup_radius);
        self.reference_frame_ms = positive(self.reference_frame_ms, defaults.reference_frame_ms);

        if !self.lookahead_buffer_px.is_finite() || self.lookahead_buffer_px < 0.0 {
            self.lookahead_buffer_px = defaults.lookahead_buffer_px;
        }

        let max_band = self.screen_height as u32;
        self.ground_base_height = self.ground_base_height.min(max_band);
        self.platform_height_max = self.platform_height_max.min(max_band);
        self.platform_height_min = self.platform_height_min.min(self.platform_height_max);

        self
    }

    /// Number of contiguous ground segments seeded under a fresh run
    pub fn safe_area_segments(&self) -> usize {
        (self.screen_width / self.platform_width).floor() as usize + 1
    }

    /// Top edge of the safe starting ground
    pub fn ground_base_top(&self) -> f32 {
        self.screen_height - self.ground_base_height as f32
    }

    /// Physics step multiplier for a tick of `dt_ms`
    pub fn physics_step(&self, dt_ms: u32) -> f32 {
        match self.integration {
            Integration::PerTick => 1.0,
            Integration::TimeScaled => dt_ms as f32 / self.reference_frame_ms,
        }
    }
}
