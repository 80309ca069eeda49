//! Tri-state game outcome.

use serde::{Deserialize, Serialize};

/// Outcome of a hangman session.
///
/// Derived from the game state on demand; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The player can keep guessing.
    InProgress,
    /// Every letter of the word has been revealed.
    Won,
    /// The wrong-guess limit has been reached.
    Lost,
}

impl GameStatus {
    /// Check if the game has ended, either way.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Check if the game was won.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, GameStatus::Won)
    }

    /// Check if the game was lost.
    #[must_use]
    pub fn is_lost(self) -> bool {
        matches!(self, GameStatus::Lost)
    }
}
