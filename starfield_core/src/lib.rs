pub mod components;
pub mod config;
pub mod context;
pub mod params;
pub mod resources;
pub mod systems;
pub mod visibility;

pub use components::*;
pub use config::*;
pub use context::*;
pub use params::*;
pub use resources::*;
pub use visibility::*;

use hecs::World;
use systems::*;

/// Advance the starfield simulation by one nominal frame
pub fn step(world: &mut World, viewport: &Viewport, config: &Config) {
    move_stars(world, viewport, config);
}

/// Helper to spawn a single star entity
pub fn create_star(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
) -> hecs::Entity {
    world.spawn((Star::new(pos, vel, radius),))
}
