// ui.rs - Controls, statistics, and grid rendering

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;

use crate::GameOfLife;
use life_engine::{
    MAX_CELL_SIZE, MAX_COLS, MAX_ROWS, MAX_SPEED, MIN_CELL_SIZE, MIN_COLS, MIN_ROWS, MIN_SPEED,
};

const LIVE: Color32 = Color32::from_rgb(74, 144, 226);
const LIVE_BORDER: Color32 = Color32::from_rgb(92, 107, 192);
const BACKGROUND: Color32 = Color32::from_rgb(26, 26, 46);

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance at most one generation per frame, and only once the
        // configured interval has elapsed; otherwise this frame re-renders
        // the current state.
        if self.is_running {
            let interval = self.config.update_interval();
            if self.scheduler.should_step(Instant::now(), interval) {
                self.engine.step();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_running, egui::Button::new("▶ Start"))
                    .clicked()
                {
                    self.start();
                }
                if ui
                    .add_enabled(self.is_running, egui::Button::new("⏸ Pause"))
                    .clicked()
                {
                    self.pause();
                }
                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }
                if ui.button("⏹ Reset").clicked() {
                    self.reset();
                }
            });

            ui.separator();

            // Moving the row/col sliders discards the grid and starts a
            // fresh session at the new dimensions.
            ui.horizontal(|ui| {
                ui.label("Rows:");
                if ui
                    .add(egui::Slider::new(&mut self.config.rows, MIN_ROWS..=MAX_ROWS))
                    .changed()
                {
                    self.apply_grid_size();
                }
                ui.label("Cols:");
                if ui
                    .add(egui::Slider::new(&mut self.config.cols, MIN_COLS..=MAX_COLS))
                    .changed()
                {
                    self.apply_grid_size();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Cell size:");
                ui.add(
                    egui::Slider::new(&mut self.config.cell_size, MIN_CELL_SIZE..=MAX_CELL_SIZE)
                        .suffix(" px"),
                );
                ui.separator();
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.config.speed, MIN_SPEED..=MAX_SPEED));
                ui.label(self.config.speed_label());
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", thousands(self.engine.generation())));
                ui.label(format!(
                    "Live cells: {}",
                    thousands(self.engine.live_cells() as u64)
                ));
                ui.label(format!(
                    "Grid: {}x{}",
                    self.engine.rows(),
                    self.engine.cols()
                ));
            });

            ui.label("Click cells to toggle them. While running, clicks only add live cells.");

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_grid(ui);
            });
        });

        // Keep frames coming while the simulation is live.
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let cell = self.config.cell_size as f32;
        let rows = self.engine.rows();
        let cols = self.engine.cols();
        let total_size = Vec2::new(cols as f32 * cell, rows as f32 * cell);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND);

        for (r, row) in self.engine.cells().iter().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                if !alive {
                    continue;
                }
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + c as f32 * cell, origin.y + r as f32 * cell),
                    Vec2::splat(cell),
                );
                painter.rect_filled(rect, 1.0, LIVE);
                painter.rect_stroke(rect, 1.0, Stroke::new(1.0, LIVE_BORDER));
            }
        }

        let grid_line = Stroke::new(0.5, Color32::from_rgba_unmultiplied(74, 144, 226, 77));
        for r in 0..=rows {
            let y = origin.y + r as f32 * cell;
            painter.line_segment(
                [egui::pos2(origin.x, y), egui::pos2(origin.x + total_size.x, y)],
                grid_line,
            );
        }
        for c in 0..=cols {
            let x = origin.x + c as f32 * cell;
            painter.line_segment(
                [egui::pos2(x, origin.y), egui::pos2(x, origin.y + total_size.y)],
                grid_line,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos - origin, cell) {
                    self.engine.toggle_cell(row, col, self.is_running);
                }
            }
        }
    }
}

/// Maps a pointer offset inside the canvas to grid coordinates. Offsets
/// above or left of the canvas map to no cell; coordinates past the far
/// edges are handled by the engine's bounds check.
fn cell_at(offset: Vec2, cell_size: f32) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    Some(((offset.y / cell_size) as usize, (offset.x / cell_size) as usize))
}

/// Renders a count with thousands separators.
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
