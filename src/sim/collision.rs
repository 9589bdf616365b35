//! Ground collision for the player body
//!
//! The player collides through a box smaller than its sprite: 70% of the
//! width, centered, and 80% of the height, aligned to the bottom. Only a body
//! that is not moving upward is resolved, so platforms can be jumped through
//! from below.

use crate::consts::{COLLISION_HEIGHT_RATIO, COLLISION_WIDTH_RATIO};

use super::platforms::Platform;
use super::player::Player;

/// The player's collision box in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CollisionBox {
    /// Box for the player's current position, snapped to whole pixels in size
    pub fn for_player(player: &Player) -> Self {
        let width = (player.width * COLLISION_WIDTH_RATIO).floor();
        let height = (player.height * COLLISION_HEIGHT_RATIO).floor();
        Self {
            x: player.pos.x + ((player.width - width) / 2.0).floor(),
            y: player.pos.y + (player.height - height),
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether this box is standing on or sinking into `platform`'s top
    fn lands_on(&self, platform: &Platform) -> bool {
        platform.overlaps_span(self.x, self.right())
            && self.bottom() >= platform.top()
            && self.y < platform.top()
    }
}

/// Resolve the player against `platforms` (ascending-x order).
///
/// The first qualifying platform wins; the body is snapped so the sprite's
/// feet sit on its top (`foot_offset` compensates for transparent rows under
/// the feet), vertical velocity is zeroed and the double jump is restored.
/// Returns the index of the platform landed on, or `None` if airborne.
pub fn resolve_ground(
    player: &mut Player,
    platforms: &[Platform],
    foot_offset: f32,
) -> Option<usize> {
    let landed = if player.vel.y >= 0.0 {
        let hitbox = CollisionBox::for_player(player);
        platforms.iter().position(|p| hitbox.lands_on(p))
    } else {
        None
    };

    match landed {
        Some(index) => {
            player.pos.y = platforms[index].top() - player.height + foot_offset;
            player.vel.y = 0.0;
            player.on_ground = true;
            player.double_jump_used = false;
        }
        None => player.on_ground = false,
    }

    landed
}
