//! # Input Module
//!
//! Maps key presses to player inputs. Only the four movement directions and
//! quitting are recognised; every other key is ignored.

use crate::Direction;
use log::trace;
use macroquad::prelude::*;

/// Player input types produced by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Step one cell in a direction
    Move(Direction),
    /// Leave the demo
    Quit,
}

impl PlayerInput {
    /// Maps a typed character to an input, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorwalk::{Direction, PlayerInput};
    ///
    /// assert_eq!(PlayerInput::from_char('W'), Some(PlayerInput::Move(Direction::North)));
    /// assert_eq!(PlayerInput::from_char('q'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let direction = match c.to_ascii_lowercase() {
            'w' => Direction::North,
            's' => Direction::South,
            'a' => Direction::West,
            'd' => Direction::East,
            _ => return None,
        };
        Some(PlayerInput::Move(direction))
    }

    /// Maps a non-character key to an input.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(PlayerInput::Move(Direction::North)),
            KeyCode::Down => Some(PlayerInput::Move(Direction::South)),
            KeyCode::Left => Some(PlayerInput::Move(Direction::West)),
            KeyCode::Right => Some(PlayerInput::Move(Direction::East)),
            KeyCode::Escape => Some(PlayerInput::Quit),
            _ => None,
        }
    }
}

/// Input handler polling macroquad once per frame.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Collects this frame's inputs in the order they were pressed.
    ///
    /// Letters arrive through the character queue so that case is folded in
    /// one place; arrows and escape are read as key presses.
    pub fn poll(&self) -> Vec<PlayerInput> {
        let mut inputs = Vec::new();

        for key in [
            KeyCode::Escape,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
        ] {
            if is_key_pressed(key) {
                inputs.extend(PlayerInput::from_key(key));
            }
        }

        while let Some(c) = get_char_pressed() {
            match PlayerInput::from_char(c) {
                Some(input) => inputs.push(input),
                None => trace!("Ignoring key {:?}", c),
            }
        }

        inputs
    }
}
