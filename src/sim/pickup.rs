//! Double-jump pickup lifecycle
//!
//! At most one pickup is in flight. It stays dormant until the score reaches
//! the spawn threshold, then enters just past the right edge and scrolls with
//! the world. Collecting it grants the double jump; letting it scroll away
//! pushes the next spawn further out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::tuning::Tuning;

/// The single pickup slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

/// Outcome of advancing an in-flight pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupUpdate {
    /// Nothing in flight, or still on its way
    Idle,
    /// Scrolled past the left buffer uncollected
    Expired,
    /// Touched by the player
    Collected,
}

/// Owns the pickup slot and the spawn schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupManager {
    pub pickup: Pickup,
    /// Score at which the next pickup may appear
    pub next_spawn_threshold: u64,
}

impl PickupManager {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pickup: Pickup {
                pos: Vec2::ZERO,
                radius: tuning.pickup_radius,
                active: false,
            },
            next_spawn_threshold: tuning.pickup_first_threshold,
        }
    }

    /// Activate the pickup if the score has reached the threshold, none is in
    /// flight and the player does not already hold a double jump.
    pub fn try_spawn(&mut self, score: u64, player: &Player, tuning: &Tuning) -> bool {
        if self.pickup.active
            || player.double_jump_available
            || score < self.next_spawn_threshold
        {
            return false;
        }

        self.pickup.pos = Vec2::new(
            tuning.screen_width + tuning.pickup_spawn_margin,
            tuning.ground_base_top() - tuning.pickup_height_offset,
        );
        self.pickup.active = true;
        log::debug!(
            "Pickup spawned at score {} ({:.0}, {:.0})",
            score,
            self.pickup.pos.x,
            self.pickup.pos.y
        );
        true
    }

    /// Scroll with the world. An uncollected pickup that passes the left
    /// buffer is retired and the next spawn threshold moves up.
    pub fn advance(&mut self, dt_ms: u32, tuning: &Tuning) -> bool {
        if !self.pickup.active {
            return false;
        }

        self.pickup.pos.x -= tuning.scroll_speed_px_per_sec * (dt_ms as f32 / 1000.0);

        if self.pickup.pos.x + self.pickup.radius < -tuning.lookahead_buffer_px {
            self.pickup.active = false;
            self.next_spawn_threshold += tuning.pickup_spawn_increment;
            log::debug!(
                "Pickup missed, next spawn at score {}",
                self.next_spawn_threshold
            );
            return true;
        }
        false
    }

    /// Generous circle test: pickup center against the player's box center,
    /// with the player counted as a circle of half its larger dimension.
    pub fn check_collection(&mut self, player: &mut Player) -> bool {
        if !self.pickup.active {
            return false;
        }

        let reach = self.pickup.radius + player.width.max(player.height) / 2.0;
        if player.center().distance_squared(self.pickup.pos) <= reach * reach {
            self.pickup.active = false;
            player.double_jump_available = true;
            log::debug!("Pickup collected, double jump available");
            return true;
        }
        false
    }

    /// Full per-tick update: spawn, scroll/expire, then collection
    pub fn update(
        &mut self,
        score: u64,
        dt_ms: u32,
        player: &mut Player,
        tuning: &Tuning,
    ) -> (bool, PickupUpdate) {
        let spawned = self.try_spawn(score, player, tuning);
        let update = if self.advance(dt_ms, tuning) {
            PickupUpdate::Expired
        } else if self.check_collection(player) {
            PickupUpdate::Collected
        } else {
            PickupUpdate::Idle
        };
        (spawned, update)
    }

    /// The pickup, if one is in flight
    pub fn active(&self) -> Option<&Pickup> {
        self.pickup.active.then_some(&self.pickup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PickupManager, Player, Tuning) {
        let tuning = Tuning::default();
        let player = Player::spawn(&tuning, tuning.ground_base_top());
        (PickupManager::new(&tuning), player, tuning)
    }

    #[test]
    fn test_dormant_below_threshold() {
        let (mut pickups, player, tuning) = setup();
        assert!(!pickups.try_spawn(9, &player, &tuning));
        assert!(pickups.active().is_none());
        assert!(pickups.try_spawn(10, &player, &tuning));
        assert!(pickups.active().is_some());
        assert!(pickups.pickup.pos.x > tuning.screen_width);
    }

    #[test]
    fn test_single_pickup_in_flight() {
        let (mut pickups, player, tuning) = setup();
        assert!(pickups.try_spawn(10, &player, &tuning));
        let pos = pickups.pickup.pos;
        assert!(!pickups.try_spawn(11, &player, &tuning));
        assert_eq!(pickups.pickup.pos, pos);
    }

    #[test]
    fn test_no_spawn_while_holding_double_jump() {
        let (mut pickups, mut player, tuning) = setup();
        player.double_jump_available = true;
        assert!(!pickups.try_spawn(50, &player, &tuning));
    }

    #[test]
    fn test_missed_pickup_raises_threshold_once() {
        let (mut pickups, player, tuning) = setup();
        assert!(pickups.try_spawn(10, &player, &tuning));

        let mut expirations = 0;
        for _ in 0..2000 {
            if pickups.advance(16, &tuning) {
                expirations += 1;
            }
            // Score is still between thresholds, nothing respawns
            pickups.try_spawn(12, &player, &tuning);
        }
        assert_eq!(expirations, 1);
        assert_eq!(pickups.next_spawn_threshold, 20);
        assert!(pickups.active().is_none());
    }

    #[test]
    fn test_collection_grants_double_jump() {
        let (mut pickups, mut player, tuning) = setup();
        pickups.try_spawn(10, &player, &tuning);
        assert!(!pickups.check_collection(&mut player));

        // Generous reach: half the larger dimension (100) plus the radius (18)
        pickups.pickup.pos = player.center() + Vec2::new(117.0, 0.0);
        assert!(pickups.check_collection(&mut player));
        assert!(player.double_jump_available);
        assert!(pickups.active().is_none());
        assert_eq!(pickups.next_spawn_threshold, 10);
    }

    #[test]
    fn test_out_of_reach() {
        let (mut pickups, mut player, tuning) = setup();
        pickups.try_spawn(10, &player, &tuning);
        pickups.pickup.pos = player.center() + Vec2::new(119.0, 0.0);
        assert!(!pickups.check_collection(&mut player));
        assert!(!player.double_jump_available);
    }

    #[test]
    fn test_update_reports_lifecycle() {
        let (mut pickups, mut player, tuning) = setup();
        assert_eq!(pickups.update(3, 16, &mut player, &tuning), (false, PickupUpdate::Idle));
        assert_eq!(pickups.update(10, 16, &mut player, &tuning), (true, PickupUpdate::Idle));

        // Drop it straight onto the player
        pickups.pickup.pos = player.center();
        assert_eq!(pickups.update(10, 16, &mut player, &tuning), (false, PickupUpdate::Collected));
    }
}
