//! The player's kinematic body
//!
//! Position is the top-left corner of the visual box, in screen pixels with
//! y growing downward. Horizontal movement snaps to a fixed speed; vertical
//! movement integrates gravity every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Horizontal direction requested by the input provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    /// Resolve held keys into an intent. Right wins when both are held.
    pub fn from_keys(left_held: bool, right_held: bool) -> Self {
        if right_held {
            HorizontalIntent::Right
        } else if left_held {
            HorizontalIntent::Left
        } else {
            HorizontalIntent::None
        }
    }
}

/// Which jump a successful [`Player::jump`] performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    Ground,
    Double,
}

/// Animation state derived from the body, for the render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    Fall,
}

/// Vertical speed beyond which the body reads as jumping/falling
const POSE_VELOCITY_THRESHOLD: f32 = 2.0;

/// The player body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the visual box
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub on_ground: bool,
    /// Granted by the pickup; kept until the run ends
    pub double_jump_available: bool,
    /// Spent during the current airtime, cleared on landing
    pub double_jump_used: bool,
}

impl Player {
    /// Place a fresh body on the ground line whose top edge is `ground_top`
    pub fn spawn(tuning: &Tuning, ground_top: f32) -> Self {
        let mut player = Self {
            pos: Vec2::new(
                tuning.player_start_x,
                ground_top - tuning.player_height + tuning.foot_offset,
            ),
            vel: Vec2::ZERO,
            width: tuning.player_width,
            height: tuning.player_height,
            on_ground: true,
            double_jump_available: false,
            double_jump_used: false,
        };
        player.clamp_x(tuning.screen_width);
        player
    }

    /// Snap horizontal velocity to the intent (no acceleration)
    pub fn apply_input(&mut self, intent: HorizontalIntent, move_speed: f32) {
        self.vel.x = match intent {
            HorizontalIntent::Left => -move_speed,
            HorizontalIntent::Right => move_speed,
            HorizontalIntent::None => 0.0,
        };
    }

    /// Jump from the ground, or double jump in the air if the pickup allows it.
    /// Returns `None` (and changes nothing) when no jump is available.
    pub fn jump(&mut self, jump_power: f32) -> Option<JumpKind> {
        if self.on_ground {
            self.vel.y = jump_power;
            self.on_ground = false;
            self.double_jump_used = false;
            Some(JumpKind::Ground)
        } else if self.double_jump_available && !self.double_jump_used {
            self.vel.y = jump_power;
            self.double_jump_used = true;
            Some(JumpKind::Double)
        } else {
            None
        }
    }

    /// Advance the body by one tick of `dt_ms` milliseconds
    pub fn integrate(&mut self, dt_ms: u32, tuning: &Tuning) {
        let step = tuning.physics_step(dt_ms);

        self.pos.x += self.vel.x * step;
        self.clamp_x(tuning.screen_width);

        self.vel.y += tuning.gravity * step;
        self.pos.y += self.vel.y * step;
    }

    /// Keep the visual box inside the viewport horizontally
    pub fn clamp_x(&mut self, screen_width: f32) {
        let max_x = (screen_width - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    /// Center of the visual box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) * 0.5
    }

    /// Top edge of the visual box
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn pose(&self) -> Pose {
        if self.vel.y < -POSE_VELOCITY_THRESHOLD {
            Pose::Jump
        } else if self.vel.y > POSE_VELOCITY_THRESHOLD {
            Pose::Fall
        } else if self.on_ground {
            Pose::Run
        } else {
            Pose::Idle
        }
    }

    /// Whether a jump request right now would do anything
    pub fn can_jump(&self) -> bool {
        self.on_ground || (self.double_jump_available && !self.double_jump_used)
    }
}
