//! Town bazaar upgrades
//!
//! Gear is bought one point at a time with experience. An unaffordable
//! purchase changes nothing and says nothing.

use crate::action::ActionResult;
use crate::gameloop::GameSession;
use crate::rng::RollProvider;

pub fn weapon_up<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    if !session.hero.upgrade_weapon(1) {
        tracing::debug!(experience = session.hero.experience, "weapon upgrade refused");
    }
    ActionResult::Success
}

pub fn armor_up<R: RollProvider>(session: &mut GameSession<R>) -> ActionResult {
    if !session.hero.upgrade_armor(1) {
        tracing::debug!(experience = session.hero.experience, "armor upgrade refused");
    }
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    #[test]
    fn test_weapon_up_spends_experience() {
        let mut session = GameSession::new(ScriptedRolls::new([1]));
        session.hero.experience = 75;
        weapon_up(&mut session);
        assert_eq!(session.hero.weapon, 1);
        assert_eq!(session.hero.experience, 25);

        weapon_up(&mut session);
        assert_eq!(session.hero.weapon, 1);
        assert_eq!(session.hero.experience, 25);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_armor_up_spends_experience() {
        let mut session = GameSession::new(ScriptedRolls::new([1]));
        session.hero.experience = 100;
        armor_up(&mut session);
        armor_up(&mut session);
        armor_up(&mut session);
        assert_eq!(session.hero.armor, 2);
        assert_eq!(session.hero.experience, 0);
    }
}
