//! Difficulty levels and the process-wide search depth setting

use std::fmt;

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named difficulty levels offered to the player.
///
/// Each level is a fixed search depth; there is no other tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies for this level.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Parses a level name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

static CURRENT: Mutex<Difficulty> = Mutex::new(Difficulty::Medium);

/// Sets the process-wide difficulty. The setting persists across move
/// selections until changed again.
pub fn set_difficulty(level: Difficulty) {
    *CURRENT.lock() = level;
}

/// Returns the currently selected difficulty.
pub fn difficulty() -> Difficulty {
    *CURRENT.lock()
}

/// Returns the search depth for the currently selected difficulty.
pub fn search_depth() -> u8 {
    difficulty().depth()
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
