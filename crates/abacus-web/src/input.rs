use glam::Vec2;
use web_sys as web;

// Picking and rod projection work in CSS pixels, so the pick radii do not
// depend on the device pixel ratio.

#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}

/// Stop the browser from turning touch drags into scrolls or zooms.
pub fn disable_touch_actions(canvas: &web::HtmlCanvasElement) {
    let _ = canvas.style().set_property("touch-action", "none");
}
