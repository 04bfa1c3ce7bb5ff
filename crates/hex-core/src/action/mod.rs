//! Room actions
//!
//! Every action the rooms offer is a variant of [`Action`]. [`execute`]
//! dispatches to the implementing function, which updates the character,
//! queues narration on the session and reports whether the game goes on.

use strum::{Display, EnumIter};

use crate::gameloop::GameSession;
use crate::rng::RollProvider;

pub mod camp;
pub mod combat;
pub mod movement;
pub mod search;
pub mod town;
pub mod trap;

/// Everything the player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Action {
    // Town
    WeaponUp,
    ArmorUp,
    Travel,

    // Empty room/corridor
    Rest,
    Scavenge,

    // Trap room
    TriggerTrap,
    DisableTrap,

    // Monster room/corridor
    Run,
    Fight,

    Search,
    Descend,
    FightBoss,
    Exit,
}

/// Result of executing an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Action resolved, the turn continues
    Success,
    /// The player left the dungeon for good
    Exited,
}

/// Run `action` against the session
pub fn execute<R: RollProvider>(action: Action, session: &mut GameSession<R>) -> ActionResult {
    tracing::debug!(%action, location = session.hero.location, "executing action");
    match action {
        Action::WeaponUp => town::weapon_up(session),
        Action::ArmorUp => town::armor_up(session),
        Action::Travel => movement::travel(session),
        Action::Rest => camp::rest(session),
        Action::Scavenge => camp::scavenge(session),
        Action::TriggerTrap => trap::trigger_trap(session),
        Action::DisableTrap => trap::disable_trap(session),
        Action::Run => combat::run(session),
        Action::Fight => combat::fight(session),
        Action::Search => search::search(session),
        Action::Descend => movement::descend(session),
        Action::FightBoss => combat::fight_boss(session),
        Action::Exit => movement::exit(session),
    }
}
