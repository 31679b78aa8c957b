use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::canvas::{hsl_to_rgb, Canvas};
use crate::types::SimulationConfig;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub speed: f32,
}

/// Owns the particle collection and advances it once per displayed frame.
///
/// `particle_count` and `speed_multiplier` are captured at every rebuild;
/// the remaining config fields are read live on each paint/step and never
/// touch the collection.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
    applied_count: usize,
    applied_speed: f32,
    frames: u64,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, config: &SimulationConfig) -> Self {
        Self::with_rng(width, height, config, StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    #[cfg(test)]
    fn with_seed(width: f32, height: f32, config: &SimulationConfig, seed: u64) -> Self {
        Self::with_rng(width, height, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, config: &SimulationConfig, rng: StdRng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng,
            applied_count: config.particle_count,
            applied_speed: config.speed_multiplier,
            frames: 0,
        };
        field.scatter(config);
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True when a structural parameter changed since the last rebuild.
    pub fn needs_rebuild(&self, config: &SimulationConfig) -> bool {
        config.particle_count != self.applied_count
            || config.speed_multiplier != self.applied_speed
    }

    /// Throws the collection away and resamples it under `config`.
    pub fn rebuild(&mut self, config: &SimulationConfig) {
        self.applied_count = config.particle_count;
        self.applied_speed = config.speed_multiplier;
        self.scatter(config);
        debug!(
            count = config.particle_count,
            speed_multiplier = config.speed_multiplier,
            "particle field rebuilt"
        );
    }

    fn scatter(&mut self, config: &SimulationConfig) {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle {
                x: self.rng.gen_range(0.0..self.width),
                y: self.rng.gen_range(0.0..self.height),
                angle: self.rng.gen_range(0.0..TAU),
                speed: (self.rng.gen_range(0.0..2.0) + 0.5) * config.speed_multiplier,
            });
        }
        self.particles = particles;
    }

    /// Fade pass plus one filled circle per particle. Moves nothing, so a
    /// paused field keeps painting its frozen frame.
    pub fn paint(&self, canvas: &mut Canvas, config: &SimulationConfig) {
        canvas.fade(0, 0, 0, 1.0 - config.trail_length);
        let rgb = hsl_to_rgb(config.hue as f32, 1.0, 0.5);
        for particle in &self.particles {
            canvas.fill_circle(particle.x, particle.y, config.particle_size, rgb);
        }
    }

    /// Advances every particle along its fixed heading, wrapping at the
    /// edges so positions always stay inside `[0, width) x [0, height)`.
    pub fn step(&mut self, config: &SimulationConfig) {
        if !config.is_running {
            return;
        }
        self.frames += 1;

        for particle in &mut self.particles {
            particle.x += particle.angle.cos() * particle.speed;
            particle.y += particle.angle.sin() * particle.speed;

            if particle.x < 0.0 {
                particle.x += self.width;
            } else if particle.x >= self.width {
                particle.x -= self.width;
            }
            if particle.y < 0.0 {
                particle.y += self.height;
            } else if particle.y >= self.height {
                particle.y -= self.height;
            }
        }
    }
}
