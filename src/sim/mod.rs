//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time arrives as an explicit per-tick input
//! - Seeded RNG only
//! - Stable iteration order (platforms in ascending x)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pickup;
pub mod platforms;
pub mod player;
pub mod run;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionBox, resolve_ground};
pub use pickup::{Pickup, PickupManager, PickupUpdate};
pub use platforms::{Platform, PlatformField};
pub use player::{HorizontalIntent, JumpKind, Player, Pose};
pub use run::{DeadChoice, DeathReport, MenuChoice, Run};
pub use score::ScoreState;
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
