//! Manual Ordering
//!
//! One-step moves over an ordered sequence.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Map the presentation layer's `move_up` flag
    pub fn from_move_up(move_up: bool) -> Self {
        if move_up {
            MoveDirection::Up
        } else {
            MoveDirection::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}

/// Swap the entry at `current` with its neighbour in `direction`
///
/// Returns false, leaving `items` untouched, when the neighbour would fall
/// outside the slice.
pub fn swap_adjacent<T>(items: &mut [T], current: usize, direction: MoveDirection) -> bool {
    if current >= items.len() {
        return false;
    }

    let target = match direction {
        MoveDirection::Up => current.checked_sub(1),
        MoveDirection::Down => Some(current + 1).filter(|&i| i < items.len()),
    };

    match target {
        Some(target) => {
            items.swap(current, target);
            true
        }
        None => false,
    }
}
