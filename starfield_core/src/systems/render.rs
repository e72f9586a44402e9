use crate::{Config, Cursor, Star};
use glam::Vec2;
use hecs::World;

/// One filled circle (white fill, black stroke outline)
#[derive(Debug, Clone, Copy)]
pub struct StarSprite {
    pub pos: Vec2,
    pub radius: f32,
}

/// One connective line segment for the shared stroke pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Cursor-centered radial erase mask (composited destination-out)
#[derive(Debug, Clone, Copy)]
pub struct Vignette {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub edge_alpha: f32,
}

/// Draw list for one frame. All segments share a single stroke pass with
/// one color and line width.
#[derive(Debug, Clone, Default)]
pub struct FrameOps {
    pub sprites: Vec<StarSprite>,
    pub segments: Vec<Segment>,
    pub vignette: Option<Vignette>,
}

/// Assemble the draw list for the current world state.
///
/// Each unordered star pair strictly closer than the link distance yields
/// exactly one segment. Cursor links and the vignette are cursor-driven
/// effects and are dropped entirely in constrained contexts.
pub fn build_frame(world: &World, cursor: &Cursor, config: &Config, constrained: bool) -> FrameOps {
    let stars: Vec<Star> = world.query::<&Star>().iter().map(|(_e, s)| *s).collect();

    let sprites = stars
        .iter()
        .map(|s| StarSprite {
            pos: s.pos,
            radius: s.radius,
        })
        .collect();

    let mut segments = Vec::new();
    for i in 0..stars.len() {
        if !constrained && stars[i].pos.distance(cursor.pos) < config.cursor_link_distance {
            segments.push(Segment {
                from: stars[i].pos,
                to: cursor.pos,
            });
        }
        for j in (i + 1)..stars.len() {
            if stars[i].pos.distance(stars[j].pos) < config.link_distance {
                segments.push(Segment {
                    from: stars[i].pos,
                    to: stars[j].pos,
                });
            }
        }
    }

    let vignette = if constrained {
        None
    } else {
        Some(Vignette {
            center: cursor.pos,
            inner_radius: config.vignette_inner_radius,
            outer_radius: config.vignette_outer_radius,
            edge_alpha: config.vignette_edge_alpha,
        })
    };

    FrameOps {
        sprites,
        segments,
        vignette,
    }
}
