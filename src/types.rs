#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub speed_multiplier: f32,
    pub particle_size: f32,
    pub trail_length: f32,
    pub hue: i32,
    pub is_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            speed_multiplier: 1.0,
            particle_size: 2.0,
            trail_length: 0.9,
            hue: 200,
            is_running: true,
        }
    }
}
