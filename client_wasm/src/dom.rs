//! DOM helpers: canvas sizing, fade classes, visibility measurement

use starfield_core::{visible_percent, FadeClass, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

/// Reference element whose scroll visibility drives the canvas fade
pub const LANDING_ELEMENT_ID: &str = "landing";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Monotonic host clock in milliseconds (drives the resize debounce)
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Current viewport size in CSS pixels
pub fn css_viewport() -> Result<(f32, f32), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    Ok((width, height))
}

pub fn user_agent() -> String {
    web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.user_agent().ok())
        .unwrap_or_default()
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected canvas context type"))
}

/// Size the backing buffer to CSS dimensions times the buffer scale and
/// pin the CSS size. Resetting the buffer wipes the context transform,
/// so the scale is reapplied here.
pub fn size_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    canvas.set_width(viewport.buffer_width() as u32);
    canvas.set_height(viewport.buffer_height() as u32);

    let style = canvas.style();
    style.set_property("width", &format!("{}px", viewport.css_width))?;
    style.set_property("height", &format!("{}px", viewport.css_height))?;

    ctx.scale(viewport.scale as f64, viewport.scale as f64)?;
    Ok(())
}

/// Swap the fade classes on the canvas element; CSS owns the transition
pub fn apply_fade(canvas: &HtmlCanvasElement, fade: FadeClass) -> Result<(), JsValue> {
    let classes = canvas.class_list();
    classes.add_1(fade.class_name())?;
    classes.remove_1(fade.opposite().class_name())?;
    Ok(())
}

/// Flat reduced-opacity treatment for constrained contexts
pub fn set_flat_opacity(canvas: &HtmlCanvasElement, opacity: f32) -> Result<(), JsValue> {
    canvas.style().set_property("opacity", &opacity.to_string())
}

/// Clamped visibility percentage of the landing element, or None when the
/// element is absent (page variant without a landing section)
pub fn landing_visibility() -> Result<Option<f32>, JsValue> {
    let window = window()?;
    let document = document()?;

    let Some(element) = document.get_element_by_id(LANDING_ELEMENT_ID) else {
        return Ok(None);
    };
    let rect = element.get_bounding_client_rect();
    let element: HtmlElement = element
        .dyn_into()
        .map_err(|_| JsValue::from_str("landing element is not an HTML element"))?;

    let window_height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    let element_height = element.offset_height() as f32;
    if element_height <= 0.0 {
        return Ok(None);
    }

    Ok(Some(visible_percent(
        rect.top() as f32,
        rect.bottom() as f32,
        window_height,
        element_height,
    )))
}
