use crate::Params;

/// Starfield configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub star_speed: f32,
    pub star_radius: f32,
    pub star_count_desktop: usize,
    pub star_count_constrained: usize,
    pub link_distance: f32,
    pub cursor_link_distance: f32,
    pub link_width: f32,
    pub vignette_inner_radius: f32,
    pub vignette_outer_radius: f32,
    pub vignette_edge_alpha: f32,
    pub constrained_opacity: f32,
    pub fade_threshold: f32,
    pub fps: f32,
    pub resize_debounce_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_speed: Params::STAR_SPEED,
            star_radius: Params::STAR_RADIUS,
            star_count_desktop: Params::STAR_COUNT_DESKTOP,
            star_count_constrained: Params::STAR_COUNT_CONSTRAINED,
            link_distance: Params::LINK_DISTANCE,
            cursor_link_distance: Params::CURSOR_LINK_DISTANCE,
            link_width: Params::LINK_WIDTH,
            vignette_inner_radius: Params::VIGNETTE_INNER_RADIUS,
            vignette_outer_radius: Params::VIGNETTE_OUTER_RADIUS,
            vignette_edge_alpha: Params::VIGNETTE_EDGE_ALPHA,
            constrained_opacity: Params::CONSTRAINED_OPACITY,
            fade_threshold: Params::FADE_THRESHOLD,
            fps: Params::FPS,
            resize_debounce_ms: Params::RESIZE_DEBOUNCE_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Star count for the current context; constrained viewports get the
    /// reduced set with the same speed range
    pub fn star_count(&self, constrained: bool) -> usize {
        if constrained {
            self.star_count_constrained
        } else {
            self.star_count_desktop
        }
    }
}
