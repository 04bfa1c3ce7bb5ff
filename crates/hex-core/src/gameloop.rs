//! Main game loop
//!
//! [`GameLoop`] drives one turn at a time: it maps the player's input to an
//! action of the current room, executes it, checks for defeat and rolls the
//! next room. Defeat and leaving the dungeon come back as a
//! [`GameLoopResult`]; only bad input and broken invariants are errors.

use std::collections::VecDeque;
use std::io;

use crate::action::{self, Action, ActionResult, movement};
use crate::character::CharacterState;
use crate::error::GameError;
use crate::rng::{GameRng, RollProvider};
use crate::room::{RoomCatalog, RoomEntry};
use crate::TOWN;

/// Source of the player's chosen action, one line per turn
pub trait ActionSource {
    /// Next line of input, or `None` once input is closed
    fn next_input(&mut self) -> io::Result<Option<String>>;
}

impl ActionSource for VecDeque<String> {
    fn next_input(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Sink for narration shown to the player
pub trait Narrator {
    fn narrate(&mut self, line: &str);
}

impl Narrator for Vec<String> {
    fn narrate(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// The run is over; the player is back in town with a fresh character
    Defeated,
    /// The player left through the dungeon exit
    Exited,
}

/// Everything one game owns: the character, the dice and pending narration
#[derive(Debug, Clone)]
pub struct GameSession<R = GameRng> {
    pub hero: CharacterState,
    pub rng: R,

    /// Messages for the current turn
    messages: Vec<String>,
}

impl<R: RollProvider> GameSession<R> {
    /// Fresh account in town
    pub fn new(rng: R) -> Self {
        Self::with_character(CharacterState::new(), rng)
    }

    pub fn with_character(hero: CharacterState, rng: R) -> Self {
        Self {
            hero,
            rng,
            messages: Vec::new(),
        }
    }

    /// Queue a line of narration
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Drain queued narration
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

/// Game loop controller
pub struct GameLoop<R = GameRng> {
    session: GameSession<R>,
    catalog: RoomCatalog,
}

impl<R: RollProvider> GameLoop<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            catalog: RoomCatalog::new(),
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<R> {
        &mut self.session
    }

    pub fn into_session(self) -> GameSession<R> {
        self.session
    }

    pub fn current_room(&self) -> Result<&RoomEntry, GameError> {
        self.catalog.get(self.session.hero.location)
    }

    /// Opening of a game: the player walks straight into the first room
    pub fn start(&mut self) {
        self.session.message("You enter a run-down looking dungeon.");
        movement::travel_silently(&mut self.session);
    }

    /// Execute a single turn
    ///
    /// Input that does not name one of the current room's actions is
    /// rejected with [`GameError::UnknownActionKey`] before anything changes.
    pub fn tick(&mut self, input: &str) -> Result<GameLoopResult, GameError> {
        let location = self.session.hero.location;
        let chosen = self.catalog.action_for(location, input)?;

        if action::execute(chosen, &mut self.session) == ActionResult::Exited {
            tracing::info!(
                experience = self.session.hero.experience,
                keys = self.session.hero.keys,
                "left the dungeon"
            );
            return Ok(GameLoopResult::Exited);
        }

        // Town business never ends a room
        if self.session.hero.location == TOWN {
            return Ok(GameLoopResult::Continue);
        }

        if self.session.hero.is_defeated() {
            self.run_over();
            return Ok(GameLoopResult::Defeated);
        }

        if chosen != Action::Travel {
            movement::travel(&mut self.session);
        }
        Ok(GameLoopResult::Continue)
    }

    fn run_over(&mut self) {
        self.session.message("You are defeated.");
        self.session.hero.apply_defeat_penalty();
        self.session.hero.start_new_run();
        tracing::info!(
            experience = self.session.hero.experience,
            keys = self.session.hero.keys,
            "run over"
        );
    }

    /// Play until the player exits the dungeon or input runs out
    ///
    /// A failed read ends the game with [`GameError::InputFailed`].
    /// Before every prompt the narrator gets the room, the character's stats
    /// and the room's actions.
    pub fn run<A, N>(&mut self, input: &mut A, narrator: &mut N) -> Result<(), GameError>
    where
        A: ActionSource,
        N: Narrator,
    {
        self.start();
        self.flush(narrator);

        loop {
            let room = self.current_room()?;
            let where_line = room.where_line();
            let prompt_line = room.prompt_line();
            narrator.narrate(&where_line);
            narrator.narrate(&self.session.hero.status_line());
            narrator.narrate(&prompt_line);

            let line = match input.next_input() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::info!("input closed");
                    return Ok(());
                }
                Err(err) => {
                    return Err(GameError::InputFailed {
                        reason: err.to_string(),
                    });
                }
            };

            match self.tick(&line) {
                Ok(GameLoopResult::Exited) => {
                    self.flush(narrator);
                    return Ok(());
                }
                Ok(_) => self.flush(narrator),
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(%err, "input rejected");
                    narrator.narrate("You think about what to do next.");
                }
                Err(err) => {
                    self.flush(narrator);
                    return Err(err);
                }
            }
        }
    }

    fn flush<N: Narrator>(&mut self, narrator: &mut N) {
        for line in self.session.take_messages() {
            narrator.narrate(&line);
        }
    }
}
