use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tracing::info;

use crate::canvas::Canvas;
use crate::particle_field::ParticleField;
use crate::types::SimulationConfig;

const CANVAS_WIDTH: usize = 800;
const CANVAS_HEIGHT: usize = 600;

pub struct ParticleApp {
    field: ParticleField,
    canvas: Canvas,
    config: SimulationConfig,
    texture: Option<TextureHandle>,
}

impl ParticleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = SimulationConfig::default();
        let field = ParticleField::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32, &config);

        info!(
            width = CANVAS_WIDTH,
            height = CANVAS_HEIGHT,
            count = config.particle_count,
            "particle visualizer started"
        );

        Self {
            field,
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            config,
            texture: None,
        }
    }

    fn update_texture(&mut self, ctx: &egui::Context) {
        let image =
            ColorImage::from_rgba_unmultiplied(self.canvas.dimensions(), self.canvas.pixels());

        if let Some(texture) = &mut self.texture {
            texture.set(image, TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("particle-field", image, TextureOptions::LINEAR));
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Particle Field");
        ui.add(
            egui::Slider::new(&mut self.config.particle_count, 10..=500)
                .step_by(10.0)
                .text("particle count"),
        );
        ui.add(
            egui::Slider::new(&mut self.config.speed_multiplier, 0.1..=5.0)
                .step_by(0.1)
                .text("speed multiplier"),
        );
        ui.add(
            egui::Slider::new(&mut self.config.particle_size, 0.5..=10.0)
                .step_by(0.5)
                .text("particle size"),
        );
        ui.add(
            egui::Slider::new(&mut self.config.trail_length, 0.0..=1.0)
                .step_by(0.01)
                .text("trail length"),
        );
        ui.add(egui::Slider::new(&mut self.config.hue, 0..=360).text("hue"));

        ui.horizontal(|ui| {
            if ui
                .button(if self.config.is_running {
                    "Pause simulation"
                } else {
                    "Resume simulation"
                })
                .clicked()
            {
                self.config.is_running = !self.config.is_running;
            }

            if ui.button("Scatter particles").clicked() {
                self.field.rebuild(&self.config);
            }
        });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("particles: {}", self.field.particles().len()));
            ui.separator();
            ui.label(format!("sim frames: {}", self.field.frames()));
        });

        ui.separator();

        if let Some(texture) = &self.texture {
            let image_size = texture.size_vec2();
            let available = ui.available_size();
            let scale = (available.x / image_size.x)
                .min(available.y / image_size.y)
                .clamp(0.8, 3.0);
            ui.image((texture.id(), image_size * scale));
        }
    }
}

impl eframe::App for ParticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.field.needs_rebuild(&self.config) {
            self.field.rebuild(&self.config);
        }

        self.field.paint(&mut self.canvas, &self.config);
        self.field.step(&self.config);
        self.update_texture(ctx);

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(290.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        ctx.request_repaint();
    }
}
