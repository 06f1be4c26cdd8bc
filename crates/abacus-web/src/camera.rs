use abacus_core::camera::{canvas_from_ndc, ndc_from_canvas, project_onto_rod_offset};
use abacus_core::scene::bead_center;
use abacus_core::{nearest_within, Abacus, BeadId, Camera, Ray};
use glam::{Mat4, Vec2};
use web_sys as web;

/// Camera for the current canvas shape.
#[inline]
pub fn canvas_camera(canvas: &web::HtmlCanvasElement, distance: f32) -> Camera {
    let width = canvas.width().max(1) as f32;
    let height = canvas.height().max(1) as f32;
    Camera::looking_at_origin(distance, width / height)
}

/// World-space ray under a pointer given in CSS pixels.
#[inline]
pub fn pointer_ray(camera: &Camera, css_size: Vec2, css_px: Vec2) -> Ray {
    camera.ray_from_ndc(ndc_from_canvas(css_px, css_size))
}

/// Bead under the pointer: nearest projected bead centre within `radius_px`.
pub fn pick_bead(
    abacus: &Abacus,
    camera: &Camera,
    model: Mat4,
    css_size: Vec2,
    css_px: Vec2,
    radius_px: f32,
) -> Option<BeadId> {
    let mut ids = Vec::with_capacity(abacus.len());
    let mut points = Vec::with_capacity(abacus.len());
    for (id, _) in abacus.iter() {
        let world = model.transform_point3(bead_center(abacus, id));
        ids.push(id);
        points.push(camera.project(world).map(|ndc| canvas_from_ndc(ndc, css_size)));
    }
    nearest_within(&points, css_px, radius_px).map(|i| ids[i])
}

/// Candidate offset for a dragged bead: where the pointer ray lands on its rod.
#[inline]
pub fn drag_candidate(
    abacus: &Abacus,
    bead: BeadId,
    camera: &Camera,
    model: Mat4,
    ray: Ray,
) -> Option<f32> {
    let bead_world = model.transform_point3(bead_center(abacus, bead));
    project_onto_rod_offset(ray, camera.forward(), bead_world, model)
}
