// config.rs - Simulation settings

use std::time::Duration;

use crate::error::{LifeError, Result};

pub const DEFAULT_WIDTH: usize = 120;                 // Columns of the demo board
pub const DEFAULT_HEIGHT: usize = 90;                 // Rows of the demo board
pub const DEFAULT_INTERVAL_MS: u64 = 120;             // Life of a generation in milliseconds
pub const DEFAULT_HISTORY_LEN: usize = 10;            // Generations remembered for repeat checks

/// Everything needed to build a [`Simulator`](crate::Simulator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub wrap: bool,
    pub generation_interval: Duration,
    pub history_len: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wrap: true,
            generation_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}

impl LifeConfig {
    pub fn new(width: usize, height: usize, wrap: bool) -> Self {
        Self {
            width,
            height,
            wrap,
            ..Self::default()
        }
    }

    pub fn with_generation_interval(mut self, interval: Duration) -> Self {
        self.generation_interval = interval;
        self
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.generation_interval.is_zero() {
            return Err(LifeError::InvalidInterval);
        }
        Ok(())
    }
}
