//! Core game constants

/// Starting resources for every run
pub const STARTING_HEALTH: i32 = 6;
pub const STARTING_ENDURANCE: i32 = 6;
pub const STARTING_LEVEL: i32 = 1;

/// Experience spent per point of weapon or armor
pub const UPGRADE_COST: i32 = 50;

/// Shape of the room and treasure die
pub const ROOM_DIE_FACES: u32 = 6;

/// Room identifiers
pub const TOWN: u8 = 0;
pub const MAX_ROOM: u8 = 9;

/// Highest roll (inclusive) on the treasure die that yields a key
pub const KEY_FIND_MAX: i32 = 3;
