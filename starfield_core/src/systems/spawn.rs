use crate::{Config, Star, StarRng, Viewport};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// (Re)build the star set: despawn every existing star, then spawn `count`
/// fresh ones with uniform positions over the buffer and per-axis
/// velocities drawn from [0, star_speed) and floored to whole units.
///
/// Idempotent by construction; nothing survives from the previous set.
/// Caller guarantees non-zero viewport dimensions.
pub fn init_stars(
    world: &mut World,
    rng: &mut StarRng,
    viewport: &Viewport,
    config: &Config,
    count: usize,
) {
    let old: Vec<hecs::Entity> = world.query::<&Star>().iter().map(|(e, _)| e).collect();
    for entity in old {
        let _ = world.despawn(entity);
    }

    let width = viewport.buffer_width();
    let height = viewport.buffer_height();

    for _ in 0..count {
        let pos = Vec2::new(rng.0.gen_range(0.0..width), rng.0.gen_range(0.0..height));
        let vel = Vec2::new(
            rng.0.gen_range(0.0..config.star_speed).floor(),
            rng.0.gen_range(0.0..config.star_speed).floor(),
        );
        world.spawn((Star::new(pos, vel, config.star_radius),));
    }
}
