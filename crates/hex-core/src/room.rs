//! Room table
//!
//! Ten fixed rooms, each with a description and the actions it offers.
//! The table is static: [`Room::choices`] is a pure lookup and
//! [`RoomCatalog`] only indexes it by room id.

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::action::Action;
use crate::error::GameError;

/// Room kinds, numbered by room id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Room {
    Town = 0,
    EmptyCorridor = 1,
    TrapRoom = 2,
    EmptyRoom = 3,
    MonsterRoom = 4,
    MonsterCorridor = 5,
    TreasureRoom = 6,
    StairsDown = 7,
    BossRoom = 8,
    DungeonExit = 9,
}

/// One action offered by a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionChoice {
    /// Lowercase key the player types
    pub key: char,
    pub action: Action,
    /// Label with the key in brackets, e.g. `[r]est`
    pub prompt: &'static str,
}

const fn choice(key: char, action: Action, prompt: &'static str) -> ActionChoice {
    ActionChoice { key, action, prompt }
}

const TOWN_CHOICES: &[ActionChoice] = &[
    choice('w', Action::WeaponUp, "magic [w]eapon"),
    choice('a', Action::ArmorUp, "magic [a]rmor"),
    choice('f', Action::Travel, "[f]ind new dungeon"),
];
const EMPTY_CHOICES: &[ActionChoice] = &[
    choice('r', Action::Rest, "[r]est"),
    choice('s', Action::Scavenge, "[s]cavenge"),
];
const TRAP_CHOICES: &[ActionChoice] = &[
    choice('t', Action::TriggerTrap, "[t]rigger trap"),
    choice('d', Action::DisableTrap, "[d]isable trap"),
];
const MONSTER_CHOICES: &[ActionChoice] = &[
    choice('r', Action::Run, "[r]un"),
    choice('f', Action::Fight, "[f]ight"),
];
const TREASURE_CHOICES: &[ActionChoice] = &[choice('s', Action::Search, "[s]earch")];
const STAIRS_CHOICES: &[ActionChoice] = &[choice('d', Action::Descend, "[d]escend")];
const BOSS_CHOICES: &[ActionChoice] = &[choice('f', Action::FightBoss, "[f]ight boss")];
const EXIT_CHOICES: &[ActionChoice] = &[choice('e', Action::Exit, "[e]xit")];

impl Room {
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Where the player is, phrased to follow "You find yourself"
    pub const fn description(self) -> &'static str {
        match self {
            Room::Town => "in a town bazaar",
            Room::EmptyCorridor => "in an empty corridor",
            Room::TrapRoom => "in a trap room",
            Room::EmptyRoom => "in an empty room",
            Room::MonsterRoom => "in a monster room",
            Room::MonsterCorridor => "in a monster corridor",
            Room::TreasureRoom => "in a treasure room",
            Room::StairsDown => "at the stairs down",
            Room::BossRoom => "in the boss monster room",
            Room::DungeonExit => "at the dungeon exit",
        }
    }

    /// Actions offered in this room, in prompt order
    pub const fn choices(self) -> &'static [ActionChoice] {
        match self {
            Room::Town => TOWN_CHOICES,
            Room::EmptyCorridor | Room::EmptyRoom => EMPTY_CHOICES,
            Room::TrapRoom => TRAP_CHOICES,
            Room::MonsterRoom | Room::MonsterCorridor => MONSTER_CHOICES,
            Room::TreasureRoom => TREASURE_CHOICES,
            Room::StairsDown => STAIRS_CHOICES,
            Room::BossRoom => BOSS_CHOICES,
            Room::DungeonExit => EXIT_CHOICES,
        }
    }
}

/// A room as presented to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomEntry {
    pub room: Room,
    pub description: &'static str,
    pub choices: &'static [ActionChoice],
}

impl RoomEntry {
    fn new(room: Room) -> Self {
        Self {
            room,
            description: room.description(),
            choices: room.choices(),
        }
    }

    /// Action bound to the player's input.
    ///
    /// Surrounding whitespace is ignored and case does not matter, but the
    /// input must be a single character.
    pub fn action_for(&self, input: &str) -> Option<Action> {
        let mut chars = input.trim().chars();
        let key = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        self.choices
            .iter()
            .find(|choice| choice.key == key)
            .map(|choice| choice.action)
    }

    pub fn where_line(&self) -> String {
        format!("You find yourself {}.", self.description)
    }

    pub fn prompt_line(&self) -> String {
        let prompts: Vec<&str> = self.choices.iter().map(|choice| choice.prompt).collect();
        format!("Actions: {}", prompts.join(", "))
    }
}

/// All rooms indexed by id
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    entries: Vec<RoomEntry>,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self {
            entries: Room::iter().map(RoomEntry::new).collect(),
        }
    }

    pub fn get(&self, id: u8) -> Result<&RoomEntry, GameError> {
        self.entries
            .get(usize::from(id))
            .ok_or(GameError::UnknownRoom { id })
    }

    /// Action bound to `input` in room `id`
    pub fn action_for(&self, id: u8, input: &str) -> Result<Action, GameError> {
        self.get(id)?
            .action_for(input)
            .ok_or_else(|| GameError::UnknownActionKey {
                room: id,
                input: input.trim().to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ROOM;

    #[test]
    fn test_catalog_covers_every_room() {
        let catalog = RoomCatalog::new();
        assert_eq!(catalog.len(), usize::from(MAX_ROOM) + 1);
        for (id, entry) in catalog.iter().enumerate() {
            assert_eq!(usize::from(entry.room.id()), id);
            assert!(!entry.choices.is_empty());
        }
    }

    #[test]
    fn test_unknown_room() {
        let catalog = RoomCatalog::new();
        assert_eq!(catalog.get(10), Err(GameError::UnknownRoom { id: 10 }));
        assert_eq!(Room::from_repr(255), None);
    }

    #[test]
    fn test_keys_are_unique_per_room() {
        for room in Room::iter() {
            let choices = room.choices();
            for (i, a) in choices.iter().enumerate() {
                assert!(a.key.is_ascii_lowercase());
                assert!(choices[i + 1..].iter().all(|b| b.key != a.key), "{room}");
            }
        }
    }

    #[test]
    fn test_key_lookup_ignores_case_and_whitespace() {
        let catalog = RoomCatalog::new();
        assert_eq!(catalog.action_for(4, "F"), Ok(Action::Fight));
        assert_eq!(catalog.action_for(4, "  r \n"), Ok(Action::Run));
        assert_eq!(catalog.action_for(0, "f"), Ok(Action::Travel));
    }

    #[test]
    fn test_key_lookup_rejects_unknown_input() {
        let catalog = RoomCatalog::new();
        for input in ["", "x", "fight", "ff"] {
            assert_eq!(
                catalog.action_for(4, input),
                Err(GameError::UnknownActionKey {
                    room: 4,
                    input: input.to_string(),
                })
            );
        }
        // Keys only work in rooms that offer them
        assert!(catalog.action_for(9, "f").is_err());
    }

    #[test]
    fn test_prompt_and_where_lines() {
        let catalog = RoomCatalog::new();
        let town = catalog.get(0).unwrap();
        assert_eq!(town.where_line(), "You find yourself in a town bazaar.");
        assert_eq!(
            town.prompt_line(),
            "Actions: magic [w]eapon, magic [a]rmor, [f]ind new dungeon"
        );
        let boss = catalog.get(8).unwrap();
        assert_eq!(boss.where_line(), "You find yourself in the boss monster room.");
        assert_eq!(boss.prompt_line(), "Actions: [f]ight boss");
    }

    #[test]
    fn test_shared_tables() {
        assert_eq!(Room::EmptyCorridor.choices(), Room::EmptyRoom.choices());
        assert_eq!(Room::MonsterRoom.choices(), Room::MonsterCorridor.choices());
        assert_ne!(
            Room::MonsterRoom.description(),
            Room::MonsterCorridor.description()
        );
    }
}
