//! Read-only frame snapshot for render/output sinks

use serde::{Deserialize, Serialize};

use super::pickup::Pickup;
use super::platforms::Platform;
use super::player::{Player, Pose};
use super::run::DeathReport;
use super::state::{GamePhase, GameState};

/// Everything a renderer or HUD needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Player,
    pub pose: Pose,
    pub platforms: Vec<Platform>,
    /// In-flight pickup, if any
    pub pickup: Option<Pickup>,
    pub score: u64,
    /// HUD indicator: the player holds a double jump
    pub double_jump_ready: bool,
    pub last_death: Option<DeathReport>,
}

impl Snapshot {
    pub fn capture(phase: GamePhase, state: &GameState, last_death: Option<DeathReport>) -> Self {
        Self {
            phase,
            player: state.player.clone(),
            pose: state.player.pose(),
            platforms: state.platforms.platforms().to_vec(),
            pickup: state.pickups.active().cloned(),
            score: state.score.score,
            double_jump_ready: state.player.double_jump_available,
            last_death,
        }
    }

    /// Platforms intersecting the viewport `[0, screen_width)`
    pub fn visible_platforms(&self, screen_width: f32) -> impl Iterator<Item = &Platform> {
        self.platforms
            .iter()
            .filter(move |p| p.overlaps_span(0.0, screen_width))
    }
}
