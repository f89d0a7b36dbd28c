//! Game resources (singleton state).

use bevy::prelude::*;
use greed_snake::{Difficulty, Direction, GameConfig, Key, Session, TickGate, translate_input};

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Main game state resource; the only owner of the session.
#[derive(Resource)]
pub struct GameState {
    pub session: Session,
    pub phase: GamePhase,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        GameState {
            session: Session::new(config.grid),
            phase: GamePhase::Menu,
            config,
        }
    }
}

/// Input buffer to queue direction changes between ticks.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    const CAPACITY: usize = 2;

    /// Queue the heading `key` asks for, judged against the last queued one.
    ///
    /// Reversals and repeats are dropped, as is anything past two buffered
    /// turns.
    pub fn queue_key(&mut self, key: Key, current: Direction) {
        let last = self.last_direction().unwrap_or(current);
        let next = translate_input(last, key);
        if next != last && self.queued_directions.len() < Self::CAPACITY {
            self.queued_directions.push(next);
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if !self.queued_directions.is_empty() {
            Some(self.queued_directions.remove(0))
        } else {
            None
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

/// Paces simulation steps against the app's monotonic clock.
#[derive(Resource)]
pub struct TickClock(pub TickGate);

impl From<Difficulty> for TickClock {
    fn from(difficulty: Difficulty) -> Self {
        TickClock(TickGate::from(difficulty))
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            intensity: 0.0,
        }
    }
}
