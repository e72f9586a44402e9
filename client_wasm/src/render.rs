//! Canvas 2D drawing of a prepared frame draw list

use std::f64::consts::PI;

use starfield_core::systems::FrameOps;
use starfield_core::{Config, Viewport};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Draw one frame. Positions arrive in buffer space; the context carries
/// the buffer-scale transform, so every coordinate is divided back to CSS
/// space before drawing.
pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    frame: &FrameOps,
    viewport: &Viewport,
    config: &Config,
) -> Result<(), JsValue> {
    let scale = viewport.scale as f64;

    ctx.set_global_composite_operation("source-over")?;
    ctx.clear_rect(
        0.0,
        0.0,
        viewport.buffer_width() as f64,
        viewport.buffer_height() as f64,
    );

    for sprite in &frame.sprites {
        ctx.set_fill_style_str("#fff");
        ctx.begin_path();
        ctx.arc(
            sprite.pos.x as f64 / scale,
            sprite.pos.y as f64 / scale,
            sprite.radius as f64,
            0.0,
            PI * 2.0,
        )?;
        ctx.fill();
        ctx.set_stroke_style_str("black");
        ctx.stroke();
    }

    // All segments share one stroke pass
    ctx.begin_path();
    for segment in &frame.segments {
        ctx.move_to(segment.from.x as f64 / scale, segment.from.y as f64 / scale);
        ctx.line_to(segment.to.x as f64 / scale, segment.to.y as f64 / scale);
    }
    ctx.set_line_width(config.link_width as f64);
    ctx.set_stroke_style_str("gray");
    ctx.stroke();

    if let Some(vignette) = &frame.vignette {
        let cx = vignette.center.x as f64 / scale;
        let cy = vignette.center.y as f64 / scale;
        let gradient = ctx.create_radial_gradient(
            cx,
            cy,
            vignette.inner_radius as f64,
            cx,
            cy,
            vignette.outer_radius as f64,
        )?;
        gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)")?;
        gradient.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", vignette.edge_alpha))?;

        // Erase toward the edges so the page background shows through
        ctx.set_global_composite_operation("destination-out")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(
            0.0,
            0.0,
            viewport.css_width as f64,
            viewport.css_height as f64,
        );
        ctx.set_global_composite_operation("source-over")?;
    }

    Ok(())
}
