use glam::Vec2;

/// Star component - one animated point in the background
///
/// Positions and velocities live in internal buffer space
/// (CSS pixels multiplied by the buffer scale).
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Star {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}
