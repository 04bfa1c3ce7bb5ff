//! Trap rooms
//!
//! Both choices cost `level` points: springing the trap costs health
//! (soaked by armor), disarming it costs endurance (soaked by weapon).

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;

pub fn trigger_trap<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    let level = session.hero.level;
    session.hero.adjust_health(-level);
    session.message("You stumble across a trap and trigger it.");
    ActionResult::Success
}

pub fn disable_trap<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    let level = session.hero.level;
    session.hero.adjust_endurance(-level);
    session.message("You spot a trap and take time to carefully disarm it.");
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    #[test]
    fn test_trigger_trap_scales_with_level() {
        let mut session = GameSession::new(ScriptedRolls::new([1]));
        session.hero.level = 3;
        session.hero.armor = 1;
        trigger_trap(&mut session);
        assert_eq!(session.hero.health, 4);
        assert_eq!(session.hero.endurance, 6);
    }

    #[test]
    fn test_trigger_trap_can_be_fatal() {
        let mut session = GameSession::new(ScriptedRolls::new([1]));
        session.hero.level = 3;
        session.hero.health = 1;
        trigger_trap(&mut session);
        assert_eq!(session.hero.health, -2);
        assert!(session.hero.is_defeated());
    }

    #[test]
    fn test_disable_trap() {
        let mut session = GameSession::new(ScriptedRolls::new([1]));
        session.hero.level = 2;
        disable_trap(&mut session);
        assert_eq!(session.hero.health, 6);
        assert_eq!(session.hero.endurance, 4);
        assert_eq!(
            session.messages(),
            ["You spot a trap and take time to carefully disarm it."]
        );
    }
}
