//! Procedural platform field
//!
//! Platforms scroll left at a fixed, time-based speed. The field keeps a
//! lookahead buffer populated on both sides of the viewport: platforms are
//! generated before they can become visible at the right edge and evicted
//! only well after they leave on the left.
//!
//! Left edges are kept in world coordinates (`f64`) and projected to the
//! screen through one accumulated scroll offset, so rounding never compounds
//! across ticks and contiguous ground stays contiguous.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A static, axis-aligned platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge
    pub x: f32,
    /// Top edge (absolute, y grows downward)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Whether the open horizontal span `(left, right)` overlaps this platform
    #[inline]
    pub fn overlaps_span(&self, left: f32, right: f32) -> bool {
        right > self.x && left < self.right()
    }
}

/// Ordered, scrolling sequence of platforms
#[derive(Debug, Clone)]
pub struct PlatformField {
    /// Screen-space view, sorted by `x`, non-overlapping
    platforms: Vec<Platform>,
    /// World-space left edge of each entry in `platforms`
    world_x: Vec<f64>,
    /// Total distance scrolled since the field was seeded
    scrolled: f64,
    rng: Pcg32,
}

impl PlatformField {
    /// Build a fresh field: a run of contiguous safe ground covering the
    /// viewport, followed by randomized platforms out to the lookahead edge.
    pub fn seeded(seed: u64, tuning: &Tuning) -> Self {
        let segments = tuning.safe_area_segments();
        let ground_height = tuning.ground_base_height as f32;
        let mut field = Self {
            platforms: Vec::with_capacity(segments * 2),
            world_x: Vec::with_capacity(segments * 2),
            scrolled: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        for i in 0..segments {
            let world = i as f64 * tuning.platform_width as f64;
            field.push(world, tuning.platform_width, ground_height, tuning);
        }
        field.extend(tuning);

        log::debug!(
            "Seeded platform field (seed {}): {} platforms, trailing edge {:.0}",
            seed,
            field.platforms.len(),
            field.trailing_edge().unwrap_or(0.0)
        );
        field
    }

    /// Scroll every platform left by the distance the world covers in `dt_ms`
    pub fn advance(&mut self, dt_ms: u32, tuning: &Tuning) {
        self.scrolled += tuning.scroll_speed_px_per_sec as f64 * (dt_ms as f64 / 1000.0);

        let mut prev_right = f32::NEG_INFINITY;
        for (platform, &world) in self.platforms.iter_mut().zip(&self.world_x) {
            platform.x = project(world, self.scrolled, prev_right);
            prev_right = platform.right();
        }
    }

    /// Drop platforms whose trailing edge has passed `-lookahead_buffer`.
    /// Returns how many were removed.
    pub fn evict(&mut self, tuning: &Tuning) -> usize {
        let limit = -tuning.lookahead_buffer_px;
        let gone = self
            .platforms
            .iter()
            .take_while(|p| p.right() < limit)
            .count();
        self.platforms.drain(..gone);
        self.world_x.drain(..gone);
        gone
    }

    /// Append platforms until the trailing edge reaches
    /// `screen_width + lookahead_buffer`. Returns how many were added.
    pub fn extend(&mut self, tuning: &Tuning) -> usize {
        let horizon = tuning.screen_width + tuning.lookahead_buffer_px;
        let mut added = 0;

        while self.trailing_edge().is_none_or(|edge| edge < horizon) {
            let gap = self.rng.random_range(tuning.gap_min..=tuning.gap_max) as f32;
            let height = self
                .rng
                .random_range(tuning.platform_height_min..=tuning.platform_height_max)
                as f32;
            // An emptied field (only possible after an enormous step) restarts
            // at the far-left buffer edge.
            let world = match (self.world_x.last(), self.platforms.last()) {
                (Some(&last_x), Some(last)) => last_x + last.width as f64 + gap as f64,
                _ => self.scrolled - tuning.lookahead_buffer_px as f64,
            };
            self.push(world, tuning.platform_width, height, tuning);
            added += 1;
        }

        added
    }

    fn push(&mut self, world: f64, width: f32, height: f32, tuning: &Tuning) {
        let prev_right = self.trailing_edge().unwrap_or(f32::NEG_INFINITY);
        self.platforms.push(Platform {
            x: project(world, self.scrolled, prev_right),
            y: tuning.screen_height - height,
            width,
            height,
        });
        self.world_x.push(world);
    }

    /// Scroll, evict and extend in pipeline order
    pub fn step(&mut self, dt_ms: u32, tuning: &Tuning) {
        self.advance(dt_ms, tuning);
        self.evict(tuning);
        self.extend(tuning);
    }

    /// Platforms in ascending-x order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn first(&self) -> Option<&Platform> {
        self.platforms.first()
    }

    /// Right edge of the last platform
    pub fn trailing_edge(&self) -> Option<f32> {
        self.platforms.last().map(Platform::right)
    }

    /// First platform (ascending x) overlapping the horizontal span
    pub fn ground_under(&self, left: f32, right: f32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.overlaps_span(left, right))
    }
}

/// Screen x for a world-space left edge, never left of the previous
/// platform's right edge
fn project(world: f64, scrolled: f64, prev_right: f32) -> f32 {
    ((world - scrolled) as f32).max(prev_right)
}
