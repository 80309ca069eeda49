//! Error types for the guess contract.

use thiserror::Error;

/// Errors raised by [`crate::GameState::guess`].
///
/// Repeated guesses are not errors; `guess` reports them through its boolean
/// return value and the caller decides how to present them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The input was empty, longer than one character, or not a letter
    /// A-Z/a-z. Carries the rejected input for diagnostics.
    #[error("invalid guess {0:?}: expected a single letter A-Z")]
    InvalidInput(String),
}
