//! Game state and core simulation types
//!
//! A [`GameState`] is one PLAYING session: every entity it owns is rebuilt
//! together when a new session starts.

use serde::{Deserialize, Serialize};

use super::pickup::PickupManager;
use super::platforms::PlatformField;
use super::player::{JumpKind, Player};
use super::score::ScoreState;
use crate::tuning::Tuning;

/// High-level run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen: start or quit
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended: restart, back to menu, or quit
    Dead,
}

/// Things that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped(JumpKind),
    Landed,
    PickupSpawned,
    PickupCollected,
    PickupExpired,
    /// Score reached a new value
    Scored(u64),
}

/// Everything one PLAYING session owns
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the platform field was generated from
    pub seed: u64,
    pub tuning: Tuning,
    pub player: Player,
    pub platforms: PlatformField,
    pub pickups: PickupManager,
    pub score: ScoreState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total simulated time
    pub elapsed_ms: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: new course from `seed`, player standing on the first
    /// platform, pickup schedule and score at their initial values.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let platforms = PlatformField::seeded(seed, &tuning);
        let ground_top = platforms
            .first()
            .map(|p| p.top())
            .unwrap_or_else(|| tuning.ground_base_top());
        let player = Player::spawn(&tuning, ground_top);
        let pickups = PickupManager::new(&tuning);

        Self {
            seed,
            player,
            platforms,
            pickups,
            score: ScoreState::default(),
            time_ticks: 0,
            elapsed_ms: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// The player has dropped below the viewport
    pub fn player_fell(&self) -> bool {
        self.player.top() > self.tuning.screen_height
    }
}
