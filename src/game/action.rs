use serde::{Deserialize, Serialize};

use crate::platform::Buttons;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Action derived from one frame of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Latch a new direction
    Move(Direction),
    /// Keep the current direction
    Continue,
}

impl Action {
    /// Picks the first pressed direction in Up, Down, Left, Right order.
    /// Two opposite buttons held together resolve by that priority, not by
    /// which was pressed last.
    pub fn from_buttons(buttons: Buttons) -> Self {
        if buttons.contains(Buttons::UP) {
            Action::Move(Direction::Up)
        } else if buttons.contains(Buttons::DOWN) {
            Action::Move(Direction::Down)
        } else if buttons.contains(Buttons::LEFT) {
            Action::Move(Direction::Left)
        } else if buttons.contains(Buttons::RIGHT) {
            Action::Move(Direction::Right)
        } else {
            Action::Continue
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}
