// ui.rs - Controls and board painting for the viewer

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tracing::warn;

use crate::LifeView;

const BOX_SIZE: f32 = 6.0;
const SPACING: f32 = 0.5;

fn edge_hint(wrap: bool) -> &'static str {
    if wrap { "Edges wrap around." } else { "Cells past the edges stay dead." }
}

impl eframe::App for LifeView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_for_repeat();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.sim.is_running(), egui::Button::new("⏭ Step")).clicked() {
                    self.sim.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(self.selected_pattern.as_str())
                    .show_ui(ui, |ui| {
                        for name in self.sim.library().names() {
                            ui.selectable_value(&mut self.selected_pattern, name.to_owned(), name);
                        }
                    });

                ui.label("x:");
                ui.add(egui::DragValue::new(&mut self.place_x).clamp_range(0..=self.sim.width() - 1));
                ui.label("y:");
                ui.add(egui::DragValue::new(&mut self.place_y).clamp_range(0..=self.sim.height() - 1));

                if ui.button("Place").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.sim.generation_interval().as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    let interval = Duration::from_millis((1000.0 / speed) as u64);
                    if let Err(err) = self.sim.set_generation_interval(interval) {
                        warn!(error = %err, "speed change rejected");
                    }
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);

                ui.separator();

                ui.checkbox(&mut self.pause_on_repeat, "Pause on repeat");
            });

            ui.separator();

            ui.label(format!("Click cells to toggle them while paused. {}", edge_hint(self.sim.wrap())));

            ui.separator();

            let cells = self.sim.snapshot();
            let rows = cells.len();
            let cols = cells.first().map_or(0, |row| row.len());

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (BOX_SIZE + SPACING) * cols as f32 - SPACING,
                (BOX_SIZE + SPACING) * rows as f32 - SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for (row, line) in cells.iter().enumerate() {
                for (col, &alive) in line.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (BOX_SIZE + SPACING);
                    let y = start_pos.y + row as f32 * (BOX_SIZE + SPACING);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                }
            }
            painter.rect_stroke(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Stroke::new(0.5, Color32::from_gray(60)),
            );

            // Handle clicking (only when not running)
            if !self.sim.is_running() && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let col = (offset.x / (BOX_SIZE + SPACING)) as usize;
                        let row = (offset.y / (BOX_SIZE + SPACING)) as usize;
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = rows * cols;
            let live_cells: usize = cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total.max(1) as f32) * 100.0));
            });
        });
    }
}
