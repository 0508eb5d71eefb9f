// main.rs - Interactive Game of Life on a toroidal grid

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use life_engine::{Config, Engine};

mod scheduler; // Step pacing
mod ui;        // egui rendering and controls

use scheduler::StepScheduler;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(GameOfLife::default())),
    )
}

/// The whole session: engine, parameters, run flag, and step pacing.
pub struct GameOfLife {
    engine: Engine,
    config: Config,
    is_running: bool,
    scheduler: StepScheduler,
    rng: StdRng,
}

impl Default for GameOfLife {
    fn default() -> Self {
        let config = Config::default();
        Self {
            engine: Engine::new(config.rows, config.cols),
            config,
            is_running: false,
            scheduler: StepScheduler::new(),
            rng: StdRng::from_os_rng(),
        }
    }
}

impl GameOfLife {
    fn start(&mut self) {
        self.is_running = true;
        // A long pause must not count as elapsed time toward the next step.
        self.scheduler.reset();
    }

    fn pause(&mut self) {
        self.is_running = false;
    }

    fn randomize(&mut self) {
        self.engine.randomize(&mut self.rng);
    }

    fn reset(&mut self) {
        self.is_running = false;
        self.engine.clear();
    }

    /// Reallocates the grid when the row/col sliders have moved away from
    /// the engine's dimensions. Prior contents are discarded.
    fn apply_grid_size(&mut self) {
        self.config = self.config.clamped();
        if self.config.rows != self.engine.rows() || self.config.cols != self.engine.cols() {
            log::info!("grid resized to {}x{}", self.config.rows, self.config.cols);
            self.engine.resize(self.config.rows, self.config.cols);
        }
    }
}
