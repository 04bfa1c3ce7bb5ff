//! Error types for the turn pipeline
//!
//! Defeat and leaving the dungeon are ordinary game events and are reported
//! through [`crate::GameLoopResult`]; only input the current room cannot
//! handle, input that cannot be read and broken room invariants end up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The input does not name one of the current room's actions.
    /// Recovered by prompting again; no state has changed.
    #[error("no action bound to '{input}' in room {room}")]
    UnknownActionKey { room: u8, input: String },

    /// The location is outside the room table. Fatal.
    #[error("unknown room id {id} (expected 0-9)")]
    UnknownRoom { id: u8 },

    /// Reading the player's input failed. Fatal.
    #[error("could not read input: {reason}")]
    InputFailed { reason: String },
}

impl GameError {
    /// True for errors the turn loop recovers from by re-prompting
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, GameError::UnknownActionKey { .. })
    }
}
