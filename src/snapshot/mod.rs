//! Opaque persistence boundary for game sessions.
//!
//! The surrounding system owns where a session lives between turns (a cookie,
//! a session store, a file); this module owns the encoding. Two formats:
//!
//! - bytes via bincode, for compact binary stores
//! - JSON via serde_json, for textual stores such as cookies
//!
//! Both round-trip the full [`GameState`]: secret word, both guessed-letter
//! collections, and the rule configuration.

use thiserror::Error;
use tracing::trace;

use crate::core::GameState;

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Binary codec failure.
    #[error("binary snapshot codec failed")]
    Binary(#[from] bincode::Error),

    /// JSON codec failure.
    #[error("JSON snapshot codec failed")]
    Json(#[from] serde_json::Error),
}

/// Encode a game into an opaque byte blob.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    let bytes = bincode::serialize(state)?;
    trace!(len = bytes.len(), "encoded binary game snapshot");
    Ok(bytes)
}

/// Reconstruct a game from a byte blob produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    let state = bincode::deserialize(bytes)?;
    trace!(len = bytes.len(), "decoded binary game snapshot");
    Ok(state)
}

/// Encode a game into a JSON string.
pub fn to_json(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

/// Reconstruct a game from a JSON string produced by [`to_json`].
pub fn from_json(json: &str) -> Result<GameState, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
