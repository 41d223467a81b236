//! Rendering: draws the full scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! during a frame. It receives a read-only view of the engine core and
//! produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The frame loop handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::engine::EngineCore;
use crate::shape::{Geometry, Shape};

/// Fill color of the throughput readout.
const FPS_COLOR: &str = "#888";
/// Inset of the throughput readout from the top-right corner, in pixels.
const FPS_INSET_PX: f64 = 8.0;

/// Draw the full scene: every visible shape in paint order, then the
/// frame-rate readout in screen space.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, core.surface_width, core.surface_height);

    // Layer 1: world space. Same transform the hit tests invert.
    ctx.save();
    ctx.translate(core.camera.origin.x, core.camera.origin.y)?;
    ctx.scale(core.camera.zoom, core.camera.zoom)?;
    for shape in core.scene.paint_order() {
        if !shape.visible {
            continue;
        }
        draw_shape(ctx, shape)?;
    }
    ctx.restore();

    // Layer 2: screen-space overlay.
    draw_fps(ctx, core)
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match &shape.geometry {
        Geometry::Rect { width, height, color, border_width, border_color } => {
            ctx.save();
            ctx.translate(shape.position.x, shape.position.y)?;
            if shape.rotation != 0.0 {
                ctx.rotate(shape.rotation)?;
            }
            ctx.set_fill_style_str(color);
            ctx.fill_rect(0.0, 0.0, *width, *height);
            if *border_width > 0.0 {
                ctx.set_stroke_style_str(border_color);
                ctx.set_line_width(*border_width);
                ctx.stroke_rect(0.0, 0.0, *width, *height);
            }
            ctx.restore();
        }
        Geometry::Circle { radius, color } => {
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.arc(shape.position.x, shape.position.y, *radius, 0.0, TAU)?;
            ctx.fill();
        }
    }
    Ok(())
}

fn draw_fps(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str(FPS_COLOR);
    ctx.set_font("12px monospace");
    ctx.set_text_align("right");
    ctx.fill_text(
        &format!("{:.0} fps", core.frames.fps()),
        core.surface_width - FPS_INSET_PX,
        FPS_INSET_PX + 12.0,
    )?;
    ctx.restore();
    Ok(())
}
