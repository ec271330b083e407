// simulator.rs - Generation stepping, the run timer and refresh delivery

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::events::{Refresh, Snapshot, SubscriberError, Subscribers};
use crate::grid::Grid;
use crate::history::RepeatHistory;
use crate::patterns::{Pattern, PatternLibrary};
use crate::rules;

/// What one call to [`Simulator::step`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub population: usize,
    pub repeated: bool,
    pub failed_subscribers: usize,
}

// Everything a tick touches, kept under one lock so steps never interleave
// with edits or with each other.
#[derive(Debug)]
struct World {
    grid: Grid,
    generation: u64,
    history: RepeatHistory,
    subscribers: Subscribers,
}

impl World {
    fn advance(&mut self) -> StepReport {
        let next = rules::next_generation(&self.grid);
        self.grid.replace(next);
        self.generation += 1;

        let repeated = self.history.observe(self.grid.matrix());
        let population = self.grid.population();
        debug!(generation = self.generation, population, repeated, "generation computed");

        let refresh = Refresh {
            generation: self.generation,
            cells: Arc::new(self.grid.clone_matrix()),
            repeated,
        };
        let failed_subscribers = self.subscribers.notify(&refresh);

        StepReport {
            generation: self.generation,
            population,
            repeated,
            failed_subscribers,
        }
    }
}

fn lock(world: &Mutex<World>) -> MutexGuard<'_, World> {
    // Every mutation completes before subscribers run, so a panic in one of
    // them leaves the grid consistent.
    world.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns a [`Grid`] and advances it one generation per [`step`](Self::step),
/// either on demand or from a Tokio timer between [`start`](Self::start) and
/// [`stop`](Self::stop).
///
/// Refresh subscribers run synchronously inside `step`, in registration
/// order, while the grid lock is held: they get a [`Snapshot`] and must not
/// call back into the same simulator. A subscriber returning `Err` is logged
/// and counted; the remaining subscribers still run.
///
/// Edits (`place`, `set`, `reset`) made while the timer runs are applied
/// between generations.
#[derive(Debug)]
pub struct Simulator {
    world: Arc<Mutex<World>>,
    library: PatternLibrary,
    interval: Duration,
    ticker: Option<JoinHandle<()>>,
    runtime: Option<Handle>,
}

impl Simulator {
    /// A `height` x `width` simulator with the standard pattern library and
    /// default timing.
    pub fn new(width: usize, height: usize, wrap: bool) -> Result<Self> {
        Self::from_config(LifeConfig::new(width, height, wrap))
    }

    pub fn from_config(config: LifeConfig) -> Result<Self> {
        Self::with_library(config, PatternLibrary::standard())
    }

    pub fn with_library(config: LifeConfig, library: PatternLibrary) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height, config.wrap)?;
        Ok(Self {
            world: Arc::new(Mutex::new(World {
                grid,
                generation: 0,
                history: RepeatHistory::new(config.history_len),
                subscribers: Subscribers::default(),
            })),
            library,
            interval: config.generation_interval,
            ticker: None,
            runtime: None,
        })
    }

    pub fn width(&self) -> usize {
        lock(&self.world).grid.width()
    }

    pub fn height(&self) -> usize {
        lock(&self.world).grid.height()
    }

    pub fn wrap(&self) -> bool {
        lock(&self.world).grid.wrap()
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn register_pattern(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.library.register(pattern)
    }

    /// Places the library pattern `name` with its top-left corner at column
    /// `x`, row `y`.
    pub fn place(&self, name: &str, x: usize, y: usize) -> Result<()> {
        let pattern = self.library.get(name)?;
        self.place_pattern(pattern, x, y)
    }

    /// Places `pattern` and forgets the repeat history, since the board no
    /// longer follows from the remembered generations.
    pub fn place_pattern(&self, pattern: &Pattern, x: usize, y: usize) -> Result<()> {
        let mut world = lock(&self.world);
        world.grid.place(pattern, x, y)?;
        world.history.clear();
        debug!(pattern = pattern.name(), x, y, "pattern placed");
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        lock(&self.world).grid.get(row, col)
    }

    pub fn set(&self, row: usize, col: usize, alive: bool) -> Result<()> {
        lock(&self.world).grid.set(row, col, alive)
    }

    /// Kills every cell and restarts the generation count. Does not stop a
    /// running timer.
    pub fn reset(&self) {
        let mut world = lock(&self.world);
        world.grid.reset();
        world.generation = 0;
        world.history.clear();
        info!("grid reset");
    }

    /// Advances one generation and notifies subscribers before returning.
    /// Works whether or not the timer is running and never changes that.
    pub fn step(&self) -> StepReport {
        lock(&self.world).advance()
    }

    /// Starts stepping every generation interval on the current Tokio
    /// runtime. The first step happens one full interval from now.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let runtime = Handle::try_current()
            .ok()
            .or_else(|| self.runtime.clone())
            .ok_or(LifeError::NoRuntime)?;
        self.start_on(&runtime);
        Ok(())
    }

    /// Like [`start`](Self::start) but on an explicit runtime, for callers
    /// that are not inside one (a GUI thread, for instance).
    pub fn start_on(&mut self, runtime: &Handle) {
        // A timer whose task died (a panicking subscriber) is not running
        if self.ticker.as_ref().is_some_and(JoinHandle::is_finished) {
            self.ticker = None;
        }
        if self.is_running() {
            return;
        }
        let world = Arc::downgrade(&self.world);
        let period = self.interval;
        let first = {
            let _entered = runtime.enter();
            Instant::now() + period
        };

        self.ticker = Some(runtime.spawn(async move {
            let mut ticks = time::interval_at(first, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                // The simulator is gone; nothing left to drive.
                let Some(world) = world.upgrade() else { break };
                lock(&world).advance();
            }
        }));
        self.runtime = Some(runtime.clone());
        info!(interval_ms = period.as_millis() as u64, "simulation started");
    }

    /// Cancels the timer. A step already in progress completes; no further
    /// step is scheduled.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            info!(generation = self.generation(), "simulation stopped");
        }
    }

    /// Whether a timer task is alive. A task that ended, for instance
    /// because a subscriber panicked during a tick, no longer counts.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    pub fn generation_interval(&self) -> Duration {
        self.interval
    }

    /// Changes the tick period. A running timer is restarted with it.
    pub fn set_generation_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(LifeError::InvalidInterval);
        }
        self.interval = interval;
        info!(interval_ms = interval.as_millis() as u64, "generation interval changed");
        if self.is_running() {
            self.stop();
            self.start()?;
        }
        Ok(())
    }

    /// Registers a refresh subscriber.
    pub fn on_refresh<F>(&self, handler: F)
    where
        F: FnMut(&Refresh) -> std::result::Result<(), SubscriberError> + Send + 'static,
    {
        lock(&self.world).subscribers.push(handler);
    }

    pub fn generation(&self) -> u64 {
        lock(&self.world).generation
    }

    pub fn population(&self) -> usize {
        lock(&self.world).grid.population()
    }

    /// Fresh copy of the current cells.
    pub fn snapshot(&self) -> Snapshot {
        Arc::new(lock(&self.world).grid.clone_matrix())
    }

    /// Copy of the whole grid, dimensions and edge policy included.
    pub fn grid(&self) -> Grid {
        lock(&self.world).grid.clone()
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
