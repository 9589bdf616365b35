//! Keyboard state to per-tick input
//!
//! Hosts feed raw key down/up events as they arrive; once per tick the game
//! loop takes a [`TickInput`]. Jump is edge-triggered (one jump per press,
//! key repeat ignored), movement is level-triggered.

use crate::sim::TickInput;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    jump_held: bool,
    jump_queued: bool,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Jump => {
                if !self.jump_held {
                    self.jump_queued = true;
                }
                self.jump_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Jump => self.jump_held = false,
        }
    }

    /// Window closed or escape pressed
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Drop held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
        self.jump_held = false;
    }

    /// Input for the coming tick; consumes the pending jump press
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            jump_pressed: self.jump_queued,
            move_left_held: self.left_held,
            move_right_held: self.right_held,
            quit: self.quit_requested,
        };
        self.jump_queued = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Jump);
        assert!(input.take_tick_input().jump_pressed);
        assert!(!input.take_tick_input().jump_pressed);

        // Key repeat while held does not re-trigger
        input.key_down(Key::Jump);
        assert!(!input.take_tick_input().jump_pressed);

        input.key_up(Key::Jump);
        input.key_down(Key::Jump);
        assert!(input.take_tick_input().jump_pressed);
    }

    #[test]
    fn test_press_and_release_within_one_tick() {
        let mut input = InputState::new();
        input.key_down(Key::Jump);
        input.key_up(Key::Jump);
        assert!(input.take_tick_input().jump_pressed);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.take_tick_input().move_left_held);
        assert!(input.take_tick_input().move_left_held);
        input.key_up(Key::Left);
        assert!(!input.take_tick_input().move_left_held);
    }

    #[test]
    fn test_quit_persists() {
        let mut input = InputState::new();
        input.request_quit();
        assert!(input.take_tick_input().quit);
        assert!(input.take_tick_input().quit);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.key_down(Key::Right);
        input.release_all();
        assert!(!input.take_tick_input().move_right_held);
    }
}
