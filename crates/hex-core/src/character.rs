//! Character state and progression rules
//!
//! Health, endurance, level, gear and location belong to the current run;
//! experience and keys belong to the account and survive defeat.

use crate::{STARTING_ENDURANCE, STARTING_HEALTH, STARTING_LEVEL, TOWN, UPGRADE_COST};

/// The adventurer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterState {
    pub health: i32,
    pub endurance: i32,
    /// Spent on gear in town, halved on defeat
    pub experience: i32,
    /// Added to every die of the room and treasure rolls
    pub keys: i32,
    pub level: i32,
    /// Soaks endurance loss
    pub weapon: i32,
    /// Soaks health loss
    pub armor: i32,
    /// Current room id, 0 is the town bazaar
    pub location: u8,
    /// Room transitions this run
    pub moves: u32,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterState {
    /// Fresh account standing in town
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            endurance: STARTING_ENDURANCE,
            experience: 0,
            keys: 0,
            level: STARTING_LEVEL,
            weapon: 0,
            armor: 0,
            location: TOWN,
            moves: 0,
        }
    }

    /// Change health; losses are reduced by armor first.
    ///
    /// Armor larger than the loss turns it into a gain.
    pub fn adjust_health(&mut self, delta: i32) {
        let delta = if delta < 0 { delta + self.armor } else { delta };
        self.health += delta;
    }

    /// Change endurance; losses are reduced by weapon first.
    pub fn adjust_endurance(&mut self, delta: i32) {
        let delta = if delta < 0 { delta + self.weapon } else { delta };
        self.endurance += delta;
    }

    /// Buy `amount` points of weapon. Returns false, changing nothing,
    /// when experience does not cover the cost.
    pub fn upgrade_weapon(&mut self, amount: u32) -> bool {
        match self.spend_on_upgrade(amount) {
            Some(points) => {
                self.weapon += points;
                true
            }
            None => false,
        }
    }

    /// Buy `amount` points of armor. Same rules as [`Self::upgrade_weapon`].
    pub fn upgrade_armor(&mut self, amount: u32) -> bool {
        match self.spend_on_upgrade(amount) {
            Some(points) => {
                self.armor += points;
                true
            }
            None => false,
        }
    }

    fn spend_on_upgrade(&mut self, amount: u32) -> Option<i32> {
        let points = i32::try_from(amount).ok()?;
        let cost = points.checked_mul(UPGRADE_COST)?;
        if self.experience < cost {
            return None;
        }
        self.experience -= cost;
        Some(points)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0 || self.endurance <= 0
    }

    /// Lose half of the experience (rounded down)
    pub fn apply_defeat_penalty(&mut self) {
        self.experience /= 2;
    }

    /// Start over in town, keeping experience and keys
    pub fn start_new_run(&mut self) {
        self.moves = 0;
        self.health = STARTING_HEALTH;
        self.endurance = STARTING_ENDURANCE;
        self.level = STARTING_LEVEL;
        self.weapon = 0;
        self.armor = 0;
        self.location = TOWN;
    }

    /// Start over from nothing
    pub fn reset_account(&mut self) {
        self.start_new_run();
        self.experience = 0;
        self.keys = 0;
    }

    /// One-line summary shown before every prompt
    pub fn status_line(&self) -> String {
        format!(
            "Health:{} End:{} XP:{} Lvl:{} Keys:{} Weapon:{} Armor:{} Loc:{} Moves:{}",
            self.health,
            self.endurance,
            self.experience,
            self.level,
            self.keys,
            self.weapon,
            self.armor,
            self.location,
            self.moves
        )
    }
}
