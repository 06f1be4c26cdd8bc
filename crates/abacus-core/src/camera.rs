//! Camera, rays and the screen/rod projections used for picking and dragging.
//!
//! These types avoid platform APIs so picking math can be tested on the host.
//! The web frontend feeds them canvas sizes and pointer positions in CSS pixels.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at_origin(CAMERA_Z, 1.0)
    }
}

impl Camera {
    /// Camera on +Z looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }

    /// Project a world point to NDC; `None` when it is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        (clip.w > 1e-6).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Canvas pixel (origin top-left, y down) to NDC (origin centre, y up).
#[inline]
pub fn ndc_from_canvas(px: Vec2, size: Vec2) -> Vec2 {
    let w = size.x.max(1.0);
    let h = size.y.max(1.0);
    Vec2::new(px.x / w * 2.0 - 1.0, 1.0 - px.y / h * 2.0)
}

/// Inverse of [`ndc_from_canvas`].
#[inline]
pub fn canvas_from_ndc(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new((ndc.x * 0.5 + 0.5) * size.x, (-ndc.y * 0.5 + 0.5) * size.y)
}

/// Distance along the ray to a plane, `None` if parallel or behind the origin.
#[inline]
pub fn ray_plane(ray: Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = plane_normal.dot(ray.dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = plane_normal.dot(plane_point - ray.origin) / denom;
    (t >= 0.0).then_some(t)
}

/// Local y of the point on a bead's rod closest to where the pointer ray meets
/// the plane through the bead facing the camera.
///
/// `model` maps the abacus' local space to world space; the rod axis is the
/// local +Y direction through `bead_world`.
pub fn project_onto_rod_offset(
    ray: Ray,
    camera_forward: Vec3,
    bead_world: Vec3,
    model: Mat4,
) -> Option<f32> {
    let t = ray_plane(ray, bead_world, camera_forward)?;
    let hit = ray.at(t);
    let axis = model.transform_vector3(Vec3::Y).normalize();
    let along = (hit - bead_world).dot(axis);
    let closest = bead_world + axis * along;
    Some(model.inverse().transform_point3(closest).y)
}

/// Index of the screen point nearest to `cursor` within `max_px`.
///
/// `None` entries (beads behind the camera) are skipped.
#[inline]
pub fn nearest_within(points: &[Option<Vec2>], cursor: Vec2, max_px: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let Some(p) = p else { continue };
        let d = p.distance(cursor);
        if d > max_px {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
