//! Game loop
//!
//! `run` is called by the host scheduler. Each call measures elapsed time,
//! then updates the player and every bubble. Bubbles popped during the pass
//! are removed, and their children added, only after every bubble has been
//! updated, so no bubble is skipped or updated twice.

use super::bubble::Bubble;
use super::player::Player;
use super::world::World;
use crate::input::{self, Key};
use crate::tuning::Tuning;

/// Notable things that happened since events were last taken
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BulletFired,
    /// Bullet reached the roof without hitting anything
    BulletMissed,
    /// A bubble was hit; `split` tells whether it left children
    BubblePopped { size_modifier: f64, split: bool },
    BubbleLanded,
    WallBounce,
    PlayerCollision,
}

#[derive(Debug)]
pub struct Game {
    pub player: Player,
    pub bubbles: Vec<Bubble>,
    pub world: World,
    /// Host timestamp (ms) of the previous tick
    pub frame_time: f64,
    tuning: Tuning,
    events: Vec<GameEvent>,
    ticks: u64,
}

impl Game {
    /// New session: player centred on the ground, one full-size bubble near
    /// the right edge
    pub fn new(tuning: Tuning, width: f64, height: f64, now_ms: f64) -> Self {
        let world = World::new(&tuning, width, height);
        let player = Player::spawn(&world, &tuning);
        let bubbles = vec![Bubble::spawn(&world, &tuning)];
        Self {
            player,
            bubbles,
            world,
            frame_time: now_ms,
            tuning,
            events: Vec::new(),
            ticks: 0,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// No bubbles left
    pub fn is_cleared(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// One scheduler callback: refresh bounds and timing, then update
    pub fn run(&mut self, now_ms: f64, width: f64, height: f64) {
        self.world.resize(width, height);
        self.advance_clock(now_ms);
        self.update();
    }

    /// Measure elapsed time since the previous tick.
    ///
    /// A zero or negative sample keeps the previous `delta_time`, so a stalled
    /// timer never hands the trajectories a zero step.
    pub fn advance_clock(&mut self, now_ms: f64) {
        let elapsed = (now_ms - self.frame_time) / 1000.0;
        if elapsed > 0.0 {
            self.world.delta_time = elapsed;
        }
        self.frame_time = now_ms;
    }

    /// Advance the simulation by `world.delta_time`
    pub fn update(&mut self) {
        self.ticks += 1;

        let player_update = self.player.update(&self.world);
        if player_update.bullet_missed {
            self.events.push(GameEvent::BulletMissed);
        }

        let mut popped: Vec<usize> = Vec::new();
        let mut spawned: Vec<Bubble> = Vec::new();

        for (index, bubble) in self.bubbles.iter_mut().enumerate() {
            let outcome = bubble.update(&self.world, &mut self.player);

            if outcome.bounced_off_wall {
                self.events.push(GameEvent::WallBounce);
            }
            if outcome.landed {
                self.events.push(GameEvent::BubbleLanded);
            }
            if outcome.touched_player {
                self.player.collision_detected("Bubble");
                self.events.push(GameEvent::PlayerCollision);
            }
            if outcome.popped {
                popped.push(index);
                let children = bubble.split(&self.tuning);
                self.events.push(GameEvent::BubblePopped {
                    size_modifier: bubble.size_modifier,
                    split: children.is_some(),
                });
                if let Some(children) = children {
                    spawned.extend(children);
                }
            }
        }

        if !popped.is_empty() {
            let mut index = 0;
            self.bubbles.retain(|_| {
                let keep = !popped.contains(&index);
                index += 1;
                keep
            });
        }
        self.bubbles.extend(spawned);
    }

    pub fn key_down(&mut self, key: Key) {
        if input::press(&mut self.player, key) {
            self.events.push(GameEvent::BulletFired);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        input::release(&mut self.player, key);
    }

    /// Drain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
