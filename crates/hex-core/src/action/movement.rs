//! Moving between rooms, down the stairs and out of the dungeon

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;
use crate::{MAX_ROOM, ROOM_DIE_FACES};

/// Roll for the next room. Keys push the roll toward the deep rooms;
/// anything past the exit is the exit.
pub fn travel<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    travel_to_next_room(session);
    session.message("You move onward.");
    ActionResult::Success
}

/// Travel without narration, used for the opening move into the dungeon
pub fn travel_silently<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    travel_to_next_room(session);
    ActionResult::Success
}

fn travel_to_next_room<R: RollProvider>(session: &mut GameSession<R>) {
    let keys = session.hero.keys;
    let roll = session.rng.roll(1, ROOM_DIE_FACES, keys);
    // Clamped both ways so the location always names a room
    let location = roll.clamp(0, i32::from(MAX_ROOM)) as u8;
    session.hero.location = location;
    session.hero.moves += 1;
    tracing::debug!(roll, location, moves = session.hero.moves, "entered room");
}

pub fn descend<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    session.hero.level += 1;
    session.message("You pad cautiously down the stairs.");
    ActionResult::Success
}

pub fn exit<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    session.message("You emerge into freedom!");
    ActionResult::Exited
}
