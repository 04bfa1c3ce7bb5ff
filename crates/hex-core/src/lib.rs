//! hex-core: Core game logic for the Hex dungeon crawl
//!
//! This crate contains all game logic with no I/O dependencies.
//! Dice come from an injected [`RollProvider`], player input from an
//! [`ActionSource`] and narration goes to a [`Narrator`], so every rule
//! can be driven deterministically from tests.

pub mod action;
pub mod character;
pub mod room;

mod consts;
mod error;
mod gameloop;
mod rng;

pub use character::CharacterState;
pub use consts::*;
pub use error::GameError;
pub use gameloop::{ActionSource, GameLoop, GameLoopResult, GameSession, Narrator};
pub use rng::{GameRng, RollProvider, ScriptedRolls};
pub use room::{ActionChoice, Room, RoomCatalog, RoomEntry};
