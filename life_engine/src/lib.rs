// lib.rs - Toroidal Game of Life engine

mod config;

pub use config::{
    Config, MAX_CELL_SIZE, MAX_COLS, MAX_ROWS, MAX_SPEED, MIN_CELL_SIZE, MIN_COLS, MIN_ROWS,
    MIN_SPEED, SPEED_LABELS, UPDATE_INTERVAL_MS,
};

use rand::Rng;

/// Probability that `randomize` leaves a cell alive.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.3;

/// Double-buffered toroidal grid plus the generation counter.
///
/// The engine holds no run/pause state; whether the simulation is live is
/// decided by the caller and passed into [`Engine::toggle_cell`] where the
/// distinction matters.
pub struct Engine {
    rows: usize,
    cols: usize,
    current: Vec<Vec<bool>>,
    next: Vec<Vec<bool>>,
    generation: u64,
}

impl Engine {
    /// Creates an all-dead `rows` x `cols` grid with generation 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            current: vec![vec![false; cols]; rows],
            next: vec![vec![false; cols]; rows],
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current grid, row-major, for rendering and statistics.
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.current
    }

    /// False for any out-of-bounds coordinate.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn live_cells(&self) -> usize {
        self.current.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Reallocates both buffers all-dead at the new dimensions and resets
    /// the generation counter. Prior grid contents are discarded.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.current = vec![vec![false; cols]; rows];
        self.next = vec![vec![false; cols]; rows];
        self.generation = 0;
    }

    /// Kills every cell and resets the generation counter, keeping the
    /// current dimensions.
    pub fn clear(&mut self) {
        for row in self.current.iter_mut() {
            row.fill(false);
        }
        for row in self.next.iter_mut() {
            row.fill(false);
        }
        self.generation = 0;
    }

    /// Repopulates the grid with each cell alive at the default
    /// probability. The generation counter is untouched.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize_with(rng, DEFAULT_LIVE_PROBABILITY);
    }

    /// As [`Engine::randomize`] with an explicit live probability, clamped
    /// into `[0, 1]`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, live_probability: f64) {
        let p = if live_probability.is_nan() {
            0.0
        } else {
            live_probability.clamp(0.0, 1.0)
        };
        for row in self.current.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.random_bool(p);
            }
        }
    }

    /// Sums the 8 neighbors of `(row, col)`, wrapping both axes so edge
    /// cells see the opposite side of the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row as isize + dr).rem_euclid(rows) as usize;
                let c = (col as isize + dc).rem_euclid(cols) as usize;
                if self.current[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation: computes every cell's next state into the
    /// scratch buffer, swaps the buffers, and bumps the counter. The swap
    /// keeps the step allocation-free; all reads during the pass come from
    /// the untouched current buffer.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self.count_live_neighbors(row, col);
                let alive = self.current[row][col];
                self.next[row][col] = match (alive, count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Edits a single cell in response to a click. Out-of-bounds
    /// coordinates are ignored.
    ///
    /// While paused a click flips the cell and counts as a generation;
    /// while `running` a click may only seed a dead cell, and the
    /// generation counter is left to the step loop.
    pub fn toggle_cell(&mut self, row: usize, col: usize, running: bool) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        if running {
            if !self.current[row][col] {
                self.current[row][col] = true;
            }
        } else {
            self.current[row][col] = !self.current[row][col];
            self.generation += 1;
        }
    }
}
