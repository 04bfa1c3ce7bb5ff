//! Empty rooms and corridors: resting and foraging

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;

pub fn rest<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    session.hero.adjust_health(1);
    session.hero.adjust_endurance(3);
    session.message("You catch some fitful shuteye.");
    ActionResult::Success
}

/// Trade a point of endurance for three health
pub fn scavenge<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    session.hero.adjust_health(3);
    session.hero.adjust_endurance(-1);
    session.message("You forage for food and find some stale bread and tepid water.");
    ActionResult::Success
}
