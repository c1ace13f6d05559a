// ui.rs - egui front end: draws the simulation and forwards edits to it

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::error;
use std::time::{Duration, Instant};

use conway::{Simulation, SimulationConfig, Status};

use crate::patterns;

const ALIVE_COLOR: Color32 = Color32::from_rgb(0x6A, 0x66, 0xA3);
const DEAD_COLOR: Color32 = Color32::from_rgb(0xDD, 0xD8, 0xB8);

pub struct LifeApp {
    sim: Simulation,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(config: &SimulationConfig) -> conway::Result<LifeApp> {
        let mut sim = Simulation::from_config(config)?;
        sim.randomize(config.density)?;
        Ok(LifeApp {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: ALIVE_COLOR,
            dead_color: DEAD_COLOR,
            selected_pattern: 0,
        })
    }

    fn step(&mut self) {
        self.sim.advance(1);
        // Nothing new to watch once the grid repeats
        if matches!(self.sim.status(), Status::Stable | Status::Periodic { .. }) {
            self.is_running = false;
        }
    }

    fn randomize(&mut self) {
        self.is_running = false;
        self.sim.restart();
        if let Err(err) = self.sim.randomize(self.sim.density()) {
            error!("Could not randomize grid: {}", err);
        }
    }

    fn apply_selected_pattern(&mut self) {
        let Some(named) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        match named.build() {
            Ok(pattern) => {
                let (width, height) = self.sim.dimensions();
                let (pw, ph) = pattern.dimensions();
                let origin = (
                    width.saturating_sub(pw) as i64 / 2,
                    height.saturating_sub(ph) as i64 / 2,
                );
                self.sim.restart();
                self.sim.seed(&pattern, origin);
            }
            Err(err) => error!("Could not build pattern {}: {}", named.name, err),
        }
    }

    fn status_text(&self) -> String {
        match self.sim.status() {
            Status::Initialized => "Ready".to_owned(),
            Status::Running => "Running".to_owned(),
            Status::Stable => "Stable".to_owned(),
            Status::Periodic { period } => format!("Periodic (period {})", period),
            Status::Stopped => "Stopped".to_owned(),
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard: Space reseeds at random, Escape quits
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.randomize();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.sim.restart();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.sim.current_generation()));
                ui.separator();
                ui.label(self.status_text());
                ui.separator();
                ui.label(format!("Executor: {:?}", self.sim.executor()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Right click or Space: random soup. Esc: quit.");

            ui.separator();

            // Draw the grid, scaled to the space left in the window
            let (width, height) = self.sim.dimensions();
            let avail = ui.available_size() - Vec2::new(0.0, 40.0);
            let box_size = (avail.x / width as f32).min(avail.y / height as f32).clamp(2.0, 15.0);
            let spacing = if box_size > 4.0 { 0.5 } else { 0.0 };
            let pitch = box_size + spacing;
            let total_size = Vec2::new(pitch * width as f32 - spacing, pitch * height as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let start_pos = response.rect.min;

            // Fill background
            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            for (y, row) in self.sim.current_grid().rows().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(start_pos.x + x as f32 * pitch, start_pos.y + y as f32 * pitch),
                        Vec2::splat(box_size),
                    );
                    let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    if spacing > 0.0 {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            if response.secondary_clicked() {
                self.randomize();
            } else if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let col = ((pos.x - start_pos.x) / pitch).floor();
                    let row = ((pos.y - start_pos.y) / pitch).floor();
                    if col >= 0.0 && row >= 0.0 && (col as usize) < width && (row as usize) < height {
                        self.sim.toggle_cell(col as i64, row as i64);
                    }
                }
            }

            ui.separator();

            let live_cells = self.sim.population();
            let total = width * height;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
