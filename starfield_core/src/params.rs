/// Tuning parameters for the starfield background
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Stars
    pub const STAR_SPEED: f32 = 30.0; // units per second, per axis
    pub const STAR_RADIUS: f32 = 1.0;
    pub const STAR_COUNT_DESKTOP: usize = 150;
    pub const STAR_COUNT_CONSTRAINED: usize = 65;

    // Connective lines (strict <)
    pub const LINK_DISTANCE: f32 = 150.0;
    pub const CURSOR_LINK_DISTANCE: f32 = 350.0;
    pub const LINK_WIDTH: f32 = 0.5;

    // Vignette (cursor-centered destination-out gradient)
    pub const VIGNETTE_INNER_RADIUS: f32 = 50.0;
    pub const VIGNETTE_OUTER_RADIUS: f32 = 500.0;
    pub const VIGNETTE_EDGE_ALPHA: f32 = 0.6;
    pub const CONSTRAINED_OPACITY: f32 = 0.3; // flat treatment when there is no cursor

    // Scroll visibility
    pub const FADE_THRESHOLD: f32 = 25.0; // percent, strict >
    pub const VISIBILITY_CAP: f32 = 50.0; // metric saturates here, never reports higher

    // Viewport
    pub const BUFFER_SCALE: f32 = 2.0; // internal buffer = CSS size * scale
    pub const CONSTRAINED_MAX_WIDTH: f32 = 800.0; // CSS px

    // Timing
    pub const FPS: f32 = 60.0; // fixed-timestep divisor, not wall clock
    pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;
}
