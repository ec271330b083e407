//! Conway's Game of Life engine.
//!
//! A [`Grid`] holds the cells, [`rules`] computes the next generation with
//! optional toroidal wraparound, and a [`Simulator`] advances the grid on
//! demand or from a timer, handing every new generation to its refresh
//! subscribers.
//!
//! ```
//! use conway::Simulator;
//!
//! let sim = Simulator::new(6, 6, false)?;
//! sim.place("blinker", 2, 2)?;
//! sim.step();
//! assert!(sim.get(1, 3)? && sim.get(2, 3)? && sim.get(3, 3)?);
//! # Ok::<(), conway::LifeError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rules;
pub mod simulator;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use events::{Refresh, Snapshot, SubscriberError};
pub use grid::{Grid, Matrix, Row};
pub use patterns::{Pattern, PatternLibrary};
pub use simulator::{Simulator, StepReport};
