//! Browser client for the starfield canvas background
//!
//! Owns the DOM boundary: canvas acquisition and sizing, the
//! requestAnimationFrame loop, event listeners, and the scroll-driven
//! fade classes. All simulation and policy logic lives in starfield_core.

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

mod dom;
mod events;
mod render;

use hecs::World;
use starfield_core::systems::{build_frame, init_stars};
use starfield_core::{
    is_constrained, step, Config, Cursor, FadeClass, Params, ResizeDebounce, StarRng, Viewport,
};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Main client state: one instance per mounted canvas
pub struct Starfield {
    world: World,
    config: Config,
    rng: StarRng,
    viewport: Viewport,
    cursor: Cursor,
    debounce: ResizeDebounce,
    constrained: bool,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    listeners: Option<events::Listeners>,
}

impl Starfield {
    /// Initialize the client against a mounted canvas element
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let (css_width, css_height) = dom::css_viewport()?;
        if css_width <= 0.0 || css_height <= 0.0 {
            return Err(JsValue::from_str("viewport has zero size"));
        }

        let constrained = is_constrained(&dom::user_agent(), css_width);
        let viewport = Viewport::new(css_width, css_height, Params::BUFFER_SCALE);
        let ctx = dom::context_2d(&canvas)?;
        dom::size_canvas(&canvas, &ctx, &viewport)?;

        let config = Config::new();
        let mut world = World::new();
        let mut rng = StarRng::new(dom::now_ms().to_bits());
        let count = config.star_count(constrained);
        init_stars(&mut world, &mut rng, &viewport, &config, count);

        console_log!("starfield: {} stars, constrained = {}", count, constrained);

        Ok(Self {
            world,
            config,
            rng,
            viewport,
            cursor: Cursor::new(),
            debounce: ResizeDebounce::new(),
            constrained,
            canvas,
            ctx,
            listeners: None,
        })
    }

    /// Rebuild the buffer and the star set for new CSS dimensions
    fn reinitialize(&mut self, css_width: f32, css_height: f32) -> Result<(), JsValue> {
        if css_width <= 0.0 || css_height <= 0.0 {
            return Ok(());
        }

        self.constrained = is_constrained(&dom::user_agent(), css_width);
        self.viewport = Viewport::new(css_width, css_height, Params::BUFFER_SCALE);
        dom::size_canvas(&self.canvas, &self.ctx, &self.viewport)?;

        let count = self.config.star_count(self.constrained);
        init_stars(
            &mut self.world,
            &mut self.rng,
            &self.viewport,
            &self.config,
            count,
        );
        Ok(())
    }

    /// One animation frame: apply any matured resize, draw, then advance
    fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        if let Some((css_width, css_height)) = self.debounce.poll(now_ms) {
            self.reinitialize(css_width, css_height)?;
        }

        let frame = build_frame(&self.world, &self.cursor, &self.config, self.constrained);
        render::draw_frame(&self.ctx, &frame, &self.viewport, &self.config)?;
        if self.constrained {
            dom::set_flat_opacity(&self.canvas, self.config.constrained_opacity)?;
        }

        step(&mut self.world, &self.viewport, &self.config);
        Ok(())
    }

    /// Coalesce a resize event into the debounce window
    fn queue_resize(&mut self) -> Result<(), JsValue> {
        let (css_width, css_height) = dom::css_viewport()?;
        self.debounce.schedule(
            dom::now_ms(),
            self.config.resize_debounce_ms,
            css_width,
            css_height,
        );
        Ok(())
    }

    fn pointer_move(&mut self, css_x: f32, css_y: f32) {
        self.cursor
            .track(css_x, css_y, self.viewport.scale, self.constrained);
    }

    /// Re-evaluate scroll visibility of the landing element
    fn scroll(&self) -> Result<(), JsValue> {
        if let Some(percent) = dom::landing_visibility()? {
            self.apply_fade_percent(percent)?;
        }
        Ok(())
    }

    fn apply_fade_percent(&self, percent: f32) -> Result<(), JsValue> {
        let fade = FadeClass::from_percent(percent, self.config.fade_threshold);
        dom::apply_fade(&self.canvas, fade)
    }

    /// Unconditional resource release: cancel the frame loop and detach
    /// every listener. Not retryable.
    fn teardown(&mut self) -> Result<(), JsValue> {
        self.debounce.cancel();
        events::stop_frame_loop()?;
        if let Some(listeners) = self.listeners.take() {
            events::detach_listeners(&listeners)?;
        }
        console_log!("starfield: torn down");
        Ok(())
    }
}

// Global client storage for WASM bindings
static mut STARFIELD: Option<Starfield> = None;

#[wasm_bindgen]
pub fn init_starfield(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let mut client = Starfield::new(canvas)?;
    client.listeners = Some(events::attach_listeners()?);
    unsafe {
        STARFIELD = Some(client);
    }
    events::start_frame_loop()?;

    // Force fade-in then fade-out before the first real scroll
    // measurement, so the canvas never flashes its unstyled default
    unsafe {
        if let Some(ref client) = STARFIELD {
            client.apply_fade_percent(50.0)?;
            client.apply_fade_percent(0.0)?;
        }
    }
    Ok(())
}

/// Render one frame. A missing client (not yet mounted, or torn down)
/// is a no-op rather than an error.
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) -> Result<(), JsValue> {
    unsafe {
        match STARFIELD {
            Some(ref mut client) => client.frame(now_ms),
            None => Ok(()),
        }
    }
}

#[wasm_bindgen]
pub fn handle_resize() -> Result<(), JsValue> {
    unsafe {
        match STARFIELD {
            Some(ref mut client) => client.queue_resize(),
            None => Ok(()),
        }
    }
}

#[wasm_bindgen]
pub fn handle_pointer_move(css_x: f32, css_y: f32) {
    unsafe {
        if let Some(ref mut client) = STARFIELD {
            client.pointer_move(css_x, css_y);
        }
    }
}

#[wasm_bindgen]
pub fn handle_scroll() -> Result<(), JsValue> {
    unsafe {
        match STARFIELD {
            Some(ref client) => client.scroll(),
            None => Ok(()),
        }
    }
}

#[wasm_bindgen]
pub fn teardown() -> Result<(), JsValue> {
    unsafe {
        if let Some(mut client) = STARFIELD.take() {
            client.teardown()?;
        }
    }
    Ok(())
}
