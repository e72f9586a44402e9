use glam::Vec2;

/// Viewport resource - CSS dimensions plus the internal buffer scale
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, scale: f32) -> Self {
        Self {
            css_width,
            css_height,
            scale,
        }
    }

    /// Internal buffer width (simulation space)
    pub fn buffer_width(&self) -> f32 {
        self.css_width * self.scale
    }

    /// Internal buffer height (simulation space)
    pub fn buffer_height(&self) -> f32 {
        self.css_height * self.scale
    }
}

/// Last known pointer position, in buffer space
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    pub pos: Vec2,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. CSS coordinates are scaled into buffer space.
    /// Constrained contexts have no hover concept, so updates are ignored.
    pub fn track(&mut self, css_x: f32, css_y: f32, scale: f32, constrained: bool) {
        if constrained {
            return;
        }
        self.pos = Vec2::new(css_x * scale, css_y * scale);
    }
}

/// Random number generator resource
pub struct StarRng(pub rand::rngs::StdRng);

impl StarRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for StarRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Pending debounced resize. Each schedule cancels and replaces the
/// previous one; only the last dimensions survive the quiet period.
#[derive(Debug, Clone, Copy)]
struct PendingResize {
    deadline_ms: f64,
    css_width: f32,
    css_height: f32,
}

/// Resize debouncer, polled from the frame loop with the host clock
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeDebounce {
    pending: Option<PendingResize>,
}

impl ResizeDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a resize, superseding any pending one
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, css_width: f32, css_height: f32) {
        self.pending = Some(PendingResize {
            deadline_ms: now_ms + delay_ms,
            css_width,
            css_height,
        });
    }

    /// Fire the pending resize once its quiet period has elapsed
    pub fn poll(&mut self, now_ms: f64) -> Option<(f32, f32)> {
        match self.pending {
            Some(p) if now_ms >= p.deadline_ms => {
                self.pending = None;
                Some((p.css_width, p.css_height))
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
