use crate::{Config, Star, Viewport};
use hecs::World;

/// Advance every star by one nominal frame (velocity / fps, fixed timestep).
///
/// Boundary handling is reflective: if the updated position left
/// [0, buffer_dim] on an axis, that axis velocity is negated for the next
/// step. The position is deliberately not clamped back inside, so a star
/// renders one frame slightly outside the bound before the flip lands.
pub fn move_stars(world: &mut World, viewport: &Viewport, config: &Config) {
    let width = viewport.buffer_width();
    let height = viewport.buffer_height();

    for (_entity, star) in world.query_mut::<&mut Star>() {
        star.pos += star.vel / config.fps;

        if star.pos.x < 0.0 || star.pos.x > width {
            star.vel.x = -star.vel.x;
        }
        if star.pos.y < 0.0 || star.pos.y > height {
            star.vel.y = -star.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_star;
    use glam::Vec2;

    fn setup() -> (World, Viewport, Config) {
        (World::new(), Viewport::new(800.0, 600.0, 2.0), Config::new())
    }

    #[test]
    fn test_star_advances_by_velocity_over_fps() {
        let (mut world, viewport, config) = setup();
        let entity = create_star(&mut world, Vec2::new(100.0, 100.0), Vec2::new(30.0, 15.0), 1.0);

        move_stars(&mut world, &viewport, &config);

        let star = world.get::<&Star>(entity).unwrap();
        assert_eq!(star.pos, Vec2::new(100.5, 100.25), "30/60 and 15/60 units");
    }

    #[test]
    fn test_velocity_flips_after_crossing_right_bound() {
        let (mut world, viewport, config) = setup();
        // One step away from crossing x = 1600
        let entity = create_star(
            &mut world,
            Vec2::new(1599.9, 100.0),
            Vec2::new(30.0, 0.0),
            1.0,
        );

        move_stars(&mut world, &viewport, &config);

        let star = *world.get::<&Star>(entity).unwrap();
        assert!(star.pos.x > 1600.0, "Overshoot frame is not clamped back");
        assert_eq!(star.vel.x, -30.0, "Sign flip takes effect next step");
    }

    #[test]
    fn test_flip_alternates_while_outside_bound() {
        let (mut world, viewport, config) = setup();
        // Already outside the bound; each step re-crosses and flips again
        let entity = create_star(
            &mut world,
            Vec2::new(1601.0, 100.0),
            Vec2::new(30.0, 0.0),
            1.0,
        );

        move_stars(&mut world, &viewport, &config);
        assert_eq!(world.get::<&Star>(entity).unwrap().vel.x, -30.0);

        // Still outside after moving back half a unit: flips again
        move_stars(&mut world, &viewport, &config);
        assert_eq!(
            world.get::<&Star>(entity).unwrap().vel.x,
            30.0,
            "Re-crossing produces alternating flips, not cumulative ones"
        );
    }

    #[test]
    fn test_single_crossing_flips_exactly_once() {
        let (mut world, viewport, config) = setup();
        let entity = create_star(
            &mut world,
            Vec2::new(1599.8, 100.0),
            Vec2::new(30.0, 0.0),
            1.0,
        );

        // Step 1: 1600.3, outside -> flip to -30
        move_stars(&mut world, &viewport, &config);
        // Step 2: 1599.8, back inside -> no flip
        move_stars(&mut world, &viewport, &config);

        let star = *world.get::<&Star>(entity).unwrap();
        assert!(star.pos.x <= 1600.0);
        assert_eq!(star.vel.x, -30.0, "One crossing, one flip");
    }

    #[test]
    fn test_axes_bounce_independently() {
        let (mut world, viewport, config) = setup();
        let entity = create_star(
            &mut world,
            Vec2::new(1599.9, 100.0),
            Vec2::new(30.0, 12.0),
            1.0,
        );

        move_stars(&mut world, &viewport, &config);

        let star = *world.get::<&Star>(entity).unwrap();
        assert_eq!(star.vel.x, -30.0);
        assert_eq!(star.vel.y, 12.0, "Y axis did not cross, so no flip");
    }

    #[test]
    fn test_top_left_bounds_also_reflect() {
        let (mut world, viewport, config) = setup();
        let entity = create_star(
            &mut world,
            Vec2::new(0.1, 0.1),
            Vec2::new(-30.0, -30.0),
            1.0,
        );

        move_stars(&mut world, &viewport, &config);

        let star = *world.get::<&Star>(entity).unwrap();
        assert!(star.pos.x < 0.0 && star.pos.y < 0.0);
        assert_eq!(star.vel, Vec2::new(30.0, 30.0));
    }
}
