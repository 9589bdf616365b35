//! Per-tick simulation pipeline
//!
//! Order within a tick: world scroll/evict/generate, player input and
//! integration, ground collision, pickup, score. The death check belongs to
//! the run state machine and happens after the tick.

use serde::{Deserialize, Serialize};

use super::collision::resolve_ground;
use super::pickup::PickupUpdate;
use super::player::HorizontalIntent;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump key went down since the previous tick (edge-triggered)
    pub jump_pressed: bool,
    /// Level-triggered direction keys
    pub move_left_held: bool,
    pub move_right_held: bool,
    /// Global quit signal (window closed, escape)
    pub quit: bool,
}

impl TickInput {
    pub fn intent(&self) -> HorizontalIntent {
        HorizontalIntent::from_keys(self.move_left_held, self.move_right_held)
    }
}

/// Advance a PLAYING session by one tick of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u32) {
    state.events.clear();
    state.time_ticks += 1;
    state.elapsed_ms += dt_ms as u64;

    let tuning = &state.tuning;

    state.platforms.step(dt_ms, tuning);

    let player = &mut state.player;
    if input.jump_pressed {
        if let Some(kind) = player.jump(tuning.jump_power) {
            state.events.push(GameEvent::Jumped(kind));
        }
    }
    player.apply_input(input.intent(), tuning.move_speed);
    player.integrate(dt_ms, tuning);

    let was_grounded = player.on_ground;
    resolve_ground(player, state.platforms.platforms(), tuning.foot_offset);
    if player.on_ground && !was_grounded {
        state.events.push(GameEvent::Landed);
    }

    let (spawned, update) = state
        .pickups
        .update(state.score.score, dt_ms, player, tuning);
    if spawned {
        state.events.push(GameEvent::PickupSpawned);
    }
    match update {
        PickupUpdate::Collected => state.events.push(GameEvent::PickupCollected),
        PickupUpdate::Expired => state.events.push(GameEvent::PickupExpired),
        PickupUpdate::Idle => {}
    }

    if state.score.accumulate(dt_ms) > 0 {
        state.events.push(GameEvent::Scored(state.score.score));
    }
}
