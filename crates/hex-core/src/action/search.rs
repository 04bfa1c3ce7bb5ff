//! Treasure rooms

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;
use crate::{KEY_FIND_MAX, ROOM_DIE_FACES};

/// Pillage the room: a low roll turns up a key, anything else is worth
/// `level` experience. Keys add to the roll, so they get rarer as the
/// player collects them.
pub fn search<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    let keys = session.hero.keys;
    let roll = session.rng.roll(1, ROOM_DIE_FACES, keys);

    let found = if roll <= KEY_FIND_MAX {
        session.hero.keys += 1;
        "a key".to_string()
    } else {
        let level = session.hero.level;
        session.hero.experience += level;
        format!("{} experience", level)
    };
    session.message(format!("You pillage the room of its riches, gaining {}.", found));
    ActionResult::Success
}
