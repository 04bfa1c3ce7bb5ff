//! Dice rolling
//!
//! Every random decision in the game goes through [`RollProvider`], which the
//! session owns. [`GameRng`] is the seeded generator used for real play and
//! [`ScriptedRolls`] replays fixed die faces for tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of dice rolls
pub trait RollProvider {
    /// Roll `count` dice with `faces` sides, adding `bonus` to each die,
    /// and return the total.
    fn roll(&mut self, count: u32, faces: u32, bonus: i32) -> i32;
}

impl<R: RollProvider + ?Sized> RollProvider for &mut R {
    fn roll(&mut self, count: u32, faces: u32, bonus: i32) -> i32 {
        (**self).roll(count, faces, bonus)
    }
}

/// Dice for a real game
///
/// The same seed always builds the same dungeon, so a `--seed` run can be
/// replayed turn for turn.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Dice for an unseeded game; the chosen seed is still reported by [`Self::seed`]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One die with `faces` sides; a faceless die shows 0
    pub fn die(&mut self, faces: u32) -> u32 {
        if faces == 0 {
            return 0;
        }
        self.rng.gen_range(1..=faces)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RollProvider for GameRng {
    fn roll(&mut self, count: u32, faces: u32, bonus: i32) -> i32 {
        if faces == 0 {
            return 0;
        }
        let total = (0..count).fold(0i32, |total, _| {
            let face = i32::try_from(self.die(faces)).unwrap_or(i32::MAX);
            total.saturating_add(face.saturating_add(bonus))
        });
        tracing::trace!(count, faces, bonus, total, "roll");
        total
    }
}

/// Deterministic roll source that replays a fixed list of die faces
///
/// Faces are handed out one per die, in order, wrapping around to the start
/// when the script runs out. The bonus is still added to every die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRolls {
    faces: Vec<i32>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(faces: impl IntoIterator<Item = i32>) -> Self {
        let mut faces: Vec<i32> = faces.into_iter().collect();
        if faces.is_empty() {
            faces.push(1);
        }
        Self { faces, next: 0 }
    }

    /// Number of dice rolled so far
    pub fn consumed(&self) -> usize {
        self.next
    }

    fn next_face(&mut self) -> i32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

impl RollProvider for ScriptedRolls {
    fn roll(&mut self, count: u32, _faces: u32, bonus: i32) -> i32 {
        (0..count).fold(0i32, |total, _| {
            total.saturating_add(self.next_face().saturating_add(bonus))
        })
    }
}
