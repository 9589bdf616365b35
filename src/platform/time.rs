//! Tick sources
//!
//! A [`Clock`] reports whole milliseconds elapsed since its previous tick.

use crate::consts::MAX_FRAME_MS;

pub trait Clock {
    /// Milliseconds since the previous call (or since creation)
    fn tick(&mut self) -> u32;
}

/// Constant step, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step_ms: u32,
}

impl FixedClock {
    pub fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    /// Closest whole-millisecond step to `fps` frames per second
    pub fn at_fps(fps: u32) -> Self {
        Self::new((1000.0 / fps.max(1) as f32).round() as u32)
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> u32 {
        self.step_ms
    }
}

/// Real elapsed time, clamped to [`MAX_FRAME_MS`] so a stall (debugger,
/// hidden tab) cannot teleport the world. Sub-millisecond remainders carry
/// over to the next tick.
#[derive(Debug)]
pub struct WallClock {
    last_ms: f64,
    carry_ms: f64,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last_ms: now_ms(),
            carry_ms: 0.0,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn tick(&mut self) -> u32 {
        let now = now_ms();
        let elapsed = (now - self.last_ms).max(0.0) + self.carry_ms;
        self.last_ms = now;

        let whole = elapsed.floor();
        self.carry_ms = elapsed - whole;
        (whole as u32).min(MAX_FRAME_MS)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::at_fps(60);
        assert_eq!(clock.tick(), 17);
        assert_eq!(clock.tick(), 17);
        assert_eq!(FixedClock::at_fps(0).tick(), 1000);
    }

    #[test]
    fn test_wall_clock_is_clamped() {
        let mut clock = WallClock::new();
        clock.last_ms -= 5_000.0;
        assert_eq!(clock.tick(), MAX_FRAME_MS);
        assert!(clock.tick() <= MAX_FRAME_MS);
    }
}
