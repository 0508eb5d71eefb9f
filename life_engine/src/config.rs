// config.rs - Grid and playback parameters shared by the UI and scheduler

use std::time::Duration;

pub const MIN_ROWS: usize = 10;
pub const MAX_ROWS: usize = 200;
pub const MIN_COLS: usize = 10;
pub const MAX_COLS: usize = 200;
pub const MIN_CELL_SIZE: usize = 2;
pub const MAX_CELL_SIZE: usize = 20;
pub const MIN_SPEED: usize = 1;
pub const MAX_SPEED: usize = 5;

/// Minimum milliseconds between generations, indexed by speed level.
/// Index 0 is unused; the speed slider ranges over 1..=5.
pub const UPDATE_INTERVAL_MS: [u64; 6] = [0, 50, 80, 120, 160, 200];

/// Display names for speed levels, indexed by `speed - 1`.
pub const SPEED_LABELS: [&str; 5] = ["Fastest", "Very Fast", "Normal", "Slow", "Slower"];

/// User-adjustable session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// Pixels per cell.
    pub cell_size: usize,
    /// Index into [`UPDATE_INTERVAL_MS`].
    pub speed: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 80,
            cell_size: 6,
            speed: 3,
        }
    }
}

impl Config {
    /// Returns a copy with every field forced into its UI bounds.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: self.cols.clamp(MIN_COLS, MAX_COLS),
            cell_size: self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
            speed: self.speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Minimum time between generations at the current speed level.
    pub fn update_interval(&self) -> Duration {
        let speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        Duration::from_millis(UPDATE_INTERVAL_MS[speed])
    }

    pub fn speed_label(&self) -> &'static str {
        let speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        SPEED_LABELS[speed - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_session_start_state() {
        let config = Config::default();
        assert_eq!(config.rows, 50);
        assert_eq!(config.cols, 80);
        assert_eq!(config.cell_size, 6);
        assert_eq!(config.speed, 3);
    }

    #[test]
    fn clamped_forces_every_field_into_bounds() {
        let config = Config {
            rows: 5,
            cols: 1000,
            cell_size: 0,
            speed: 9,
        }
        .clamped();
        assert_eq!(config.rows, MIN_ROWS);
        assert_eq!(config.cols, MAX_COLS);
        assert_eq!(config.cell_size, MIN_CELL_SIZE);
        assert_eq!(config.speed, MAX_SPEED);
    }

    #[test]
    fn clamped_leaves_in_bounds_values_alone() {
        let config = Config::default();
        assert_eq!(config.clamped(), config);
    }

    #[test]
    fn update_interval_follows_the_latency_table() {
        for speed in MIN_SPEED..=MAX_SPEED {
            let config = Config {
                speed,
                ..Config::default()
            };
            assert_eq!(
                config.update_interval(),
                Duration::from_millis(UPDATE_INTERVAL_MS[speed])
            );
        }
        assert_eq!(Config::default().update_interval(), Duration::from_millis(120));
    }

    #[test]
    fn speed_labels_cover_the_slider_range() {
        let labels: Vec<&str> = (MIN_SPEED..=MAX_SPEED)
            .map(|speed| {
                Config {
                    speed,
                    ..Config::default()
                }
                .speed_label()
            })
            .collect();
        assert_eq!(labels, ["Fastest", "Very Fast", "Normal", "Slow", "Slower"]);
    }

    #[test]
    fn out_of_range_speed_is_clamped_not_panicking() {
        let config = Config {
            speed: 0,
            ..Config::default()
        };
        assert_eq!(config.update_interval(), Duration::from_millis(50));
        assert_eq!(config.speed_label(), "Fastest");
        let config = Config {
            speed: 42,
            ..Config::default()
        };
        assert_eq!(config.update_interval(), Duration::from_millis(200));
        assert_eq!(config.speed_label(), "Slower");
    }
}
