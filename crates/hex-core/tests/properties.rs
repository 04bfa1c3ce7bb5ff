use hex_core::action::movement;
use hex_core::{CharacterState, GameSession, MAX_ROOM, ScriptedRolls, TOWN, UPGRADE_COST};
use proptest::prelude::*;

proptest! {
    #[test]
    fn armor_offsets_every_loss(health in -20i32..20, armor in 0i32..10, damage in -30i32..0) {
        let mut hero = CharacterState::new();
        hero.health = health;
        hero.armor = armor;
        hero.adjust_health(damage);
        prop_assert_eq!(hero.health, health + damage + armor);
    }

    #[test]
    fn weapon_offsets_every_loss(endurance in -20i32..20, weapon in 0i32..10, loss in -30i32..0) {
        let mut hero = CharacterState::new();
        hero.endurance = endurance;
        hero.weapon = weapon;
        hero.adjust_endurance(loss);
        prop_assert_eq!(hero.endurance, endurance + loss + weapon);
    }

    #[test]
    fn upgrade_succeeds_only_when_affordable(experience in 0i32..500, amount in 0u32..6) {
        let mut hero = CharacterState::new();
        hero.experience = experience;
        let cost = UPGRADE_COST * amount as i32;

        let bought = hero.upgrade_weapon(amount);

        prop_assert_eq!(bought, experience >= cost);
        if bought {
            prop_assert_eq!(hero.experience, experience - cost);
            prop_assert_eq!(hero.weapon, amount as i32);
        } else {
            prop_assert_eq!(hero.experience, experience);
            prop_assert_eq!(hero.weapon, 0);
        }
    }

    #[test]
    fn defeat_always_lands_in_town(
        experience in 0i32..10_000,
        keys in 0i32..50,
        level in 1i32..20,
        health in -40i32..1,
        location in 1u8..=MAX_ROOM,
    ) {
        let mut hero = CharacterState::new();
        hero.experience = experience;
        hero.keys = keys;
        hero.level = level;
        hero.health = health;
        hero.location = location;

        hero.apply_defeat_penalty();
        hero.start_new_run();

        prop_assert_eq!(hero.health, 6);
        prop_assert_eq!(hero.endurance, 6);
        prop_assert_eq!(hero.level, 1);
        prop_assert_eq!(hero.location, TOWN);
        prop_assert_eq!(hero.experience, experience / 2);
        prop_assert_eq!(hero.keys, keys);
        prop_assert!(hero.experience >= 0);
    }

    #[test]
    fn travel_stays_in_the_room_table(keys in 0i32..1_000, face in 1i32..=6) {
        let mut session = GameSession::new(ScriptedRolls::new([face]));
        session.hero.keys = keys;
        movement::travel(&mut session);
        prop_assert!(session.hero.location <= MAX_ROOM);
        prop_assert_eq!(i32::from(session.hero.location), (face + keys).min(9));
    }

    #[test]
    fn seeded_travel_stays_in_the_room_table(seed in any::<u64>(), keys in 0i32..1_000) {
        let mut session = GameSession::new(hex_core::GameRng::new(seed));
        session.hero.keys = keys;
        for _ in 0..20 {
            movement::travel(&mut session);
            prop_assert!(session.hero.location <= MAX_ROOM);
        }
        prop_assert_eq!(session.hero.moves, 20);
    }
}
