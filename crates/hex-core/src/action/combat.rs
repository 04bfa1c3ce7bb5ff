//! Monster and boss fights
//!
//! A regular fight goes through gear: armor soaks the wound. The boss
//! ignores gear and hits both pools for double the level.

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;

pub fn run<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    session.message("You flee in terror.");
    ActionResult::Success
}

pub fn fight<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    let level = session.hero.level;
    session.hero.adjust_health(-level);
    session.hero.adjust_endurance(level);
    session.hero.experience += level;

    if session.hero.is_defeated() {
        session.message("You fight valiantly and fall in battle.");
    } else {
        session.message("You fight valiantly and slaughter every monster in the room.");
    }
    ActionResult::Success
}

pub fn fight_boss<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    let blow = 2 * session.hero.level;
    session.hero.health -= blow;
    session.hero.endurance -= blow;
    session.hero.experience += blow;

    if session.hero.is_defeated() {
        session.message("You fight valiantly and fall in battle.");
    } else {
        session.message("You fight valiantly and slaughter the beast.");
    }
    ActionResult::Success
}
