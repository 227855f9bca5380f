//! Session lifecycle
//!
//! The host UI owns one `Session`. Start, restart and stop map onto its
//! buttons; `run` is the body of the scheduled callback. Scheduling itself
//! (creating and cancelling the timer) stays with the host, keyed off the
//! `bool` results here.

use crate::input::Key;
use crate::render::{Surface, draw_game, scene};
use crate::sim::{Game, GameEvent};
use crate::tuning::Tuning;

#[derive(Debug)]
pub struct Session {
    tuning: Tuning,
    game: Option<Game>,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning, game: None }
    }

    pub fn is_running(&self) -> bool {
        self.game.is_some()
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Tuning every game of this session starts with
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Start a game. Returns false (and does nothing) if one is running.
    pub fn start(&mut self, now_ms: f64, width: f64, height: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.game = Some(Game::new(self.tuning.clone(), width, height, now_ms));
        log::info!("Game started");
        true
    }

    /// Stop any running game and start a fresh one
    pub fn restart(&mut self, now_ms: f64, width: f64, height: f64) {
        self.stop();
        self.game = Some(Game::new(self.tuning.clone(), width, height, now_ms));
        log::info!("Game restarted");
    }

    /// Drop the running game. Returns false if there was none.
    pub fn stop(&mut self) -> bool {
        if self.game.take().is_none() {
            return false;
        }
        log::info!("Game stopped");
        true
    }

    /// One scheduled tick: update everything, then draw.
    ///
    /// Returns the events of this tick, or `None` when no game is running.
    pub fn run<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> Option<Vec<GameEvent>> {
        let game = self.game.as_mut()?;
        game.run(now_ms, surface.width(), surface.height());
        draw_game(game, surface);
        Some(game.take_events())
    }

    /// Clear the drawing surface (used after stopping)
    pub fn clear<S: Surface>(surface: &mut S) {
        scene::clear(surface);
    }

    pub fn key_down(&mut self, key: &str) {
        if let (Some(game), Some(key)) = (self.game.as_mut(), Key::from_key(key)) {
            game.key_down(key);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let (Some(game), Some(key)) = (self.game.as_mut(), Key::from_key(key)) {
            game.key_up(key);
        }
    }
}
