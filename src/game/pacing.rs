use std::time::Duration;

use clap::ValueEnum;

use super::GameError;

/// Difficulty levels; each is a fixed tick rate in ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    Easy = 1,
    Normal = 2,
    Hard = 3,
    #[default]
    Lunatic = 4,
    Inhuman = 5,
}

impl Difficulty {
    pub fn ticks_per_second(&self) -> u32 {
        *self as u32
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second()
    }
}

/// Monotonic-clock gate deciding when the next simulation step may run.
///
/// Timestamps are caller supplied (any monotonic clock measured from a fixed
/// epoch), which keeps the cadence independent of frame rate and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGate {
    interval: Duration,
    last_tick: Duration,
}

impl TickGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Duration::ZERO,
        }
    }

    pub fn from_ticks_per_second(ticks_per_second: u32) -> Result<Self, GameError> {
        if ticks_per_second == 0 {
            return Err(GameError::InvalidTickRate);
        }
        Ok(Self::new(Duration::from_secs(1) / ticks_per_second))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and records `now` when at least one interval has elapsed
    /// since the last accepted tick (or the last reset).
    pub fn ready(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Restart the interval measurement from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.last_tick = now;
    }
}

impl From<Difficulty> for TickGate {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty.tick_interval())
    }
}
