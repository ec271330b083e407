// main.rs - Desktop viewer for the conway engine
// The engine steps on a tokio timer; this window subscribes to refresh and paints

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use conway::{LifeConfig, Simulator};
use eframe::egui;
use egui::Color32;
use tokio::runtime::Runtime;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod ui;

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(d) = "conway=info".parse() {
        filter = filter.add_directive(d);
    }
    if let Ok(d) = "grid_display=info".parse() {
        filter = filter.add_directive(d);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // One worker is enough: the timer task is the only thing it runs
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;

    let sim = Simulator::from_config(LifeConfig::default())?;
    tile_aliens(&sim)?;
    info!(population = sim.population(), "demo board seeded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeView::new(cc, sim, runtime))),
    )?;
    Ok(())
}

/// Seeds the demo board with a 7x7 block of invaders.
fn tile_aliens(sim: &Simulator) -> conway::Result<()> {
    for i in 0..7 {
        for j in 0..7 {
            sim.place("alien", 15 + j * 13, 15 + i * 7)?;
        }
    }
    Ok(())
}

/// Window state around a running [`Simulator`].
pub struct LifeView {
    sim: Simulator,
    runtime: Runtime,
    repeated: Arc<AtomicBool>,      // Set by the refresh subscriber, read by the UI

    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: String,
    pub place_x: usize,
    pub place_y: usize,
    pub pause_on_repeat: bool,
}

impl LifeView {
    fn new(cc: &eframe::CreationContext<'_>, sim: Simulator, runtime: Runtime) -> Self {
        let repeated = Arc::new(AtomicBool::new(false));
        {
            let ctx = cc.egui_ctx.clone();
            let repeated = Arc::clone(&repeated);
            sim.on_refresh(move |refresh| {
                if refresh.repeated {
                    repeated.store(true, Ordering::Relaxed);
                }
                ctx.request_repaint();
                Ok(())
            });
        }

        Self {
            sim,
            runtime,
            repeated,
            live_color: Color32::from_rgb(0xb5, 0x89, 0x00),
            dead_color: Color32::from_rgb(0x07, 0x36, 0x42),
            selected_pattern: "glider".to_owned(),
            place_x: 0,
            place_y: 0,
            pause_on_repeat: true,
        }
    }

    pub fn toggle_running(&mut self) {
        if self.sim.is_running() {
            self.sim.stop();
        } else {
            self.repeated.store(false, Ordering::Relaxed);
            self.sim.start_on(self.runtime.handle());
        }
    }

    /// Stops the timer once the board has settled into a repeat.
    pub fn check_for_repeat(&mut self) {
        if self.repeated.swap(false, Ordering::Relaxed) && self.pause_on_repeat && self.sim.is_running() {
            info!(generation = self.sim.generation(), "board repeats, pausing");
            self.sim.stop();
        }
    }

    pub fn clear_grid(&mut self) {
        self.sim.stop();
        self.sim.reset();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Err(err) = self.sim.place(&self.selected_pattern, self.place_x, self.place_y) {
            warn!(pattern = %self.selected_pattern, error = %err, "could not place pattern");
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.sim.get(row, col) {
            Ok(alive) => {
                if let Err(err) = self.sim.set(row, col, !alive) {
                    warn!(row, col, error = %err, "could not toggle cell");
                }
            }
            Err(err) => warn!(row, col, error = %err, "click outside the board"),
        }
    }
}
