//! Scene layout in the abacus' local space: frame, rods and beads placed by
//! formula. The renderer applies the assembly rotation on top.

use crate::abacus::Abacus;
use crate::bead::BeadId;
use crate::constants::*;
use crate::layout::{frame_width, rod_x, Layout};
use crate::mesh::Shape;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub transform: Mat4,
    /// Linear RGB.
    pub color: [f32; 3],
}

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn srgb_to_linear(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(srgb_channel_to_linear)
}

fn cuboid(center: Vec3, size: Vec3) -> Primitive {
    Primitive {
        shape: Shape::Cube,
        transform: Mat4::from_scale_rotation_translation(size, glam::Quat::IDENTITY, center),
        color: srgb_to_linear(WOOD_RGB),
    }
}

/// Frame bars, side posts, the optional divider and one rod per column.
pub fn frame_primitives(layout: Layout) -> Vec<Primitive> {
    let frame = layout.frame();
    let width = frame_width();
    let post_height = frame.rod_length() + BAR_THICKNESS;
    let mut out = Vec::with_capacity(5 + ROD_COUNT);
    out.push(cuboid(
        Vec3::new(0.0, frame.top_y, 0.0),
        Vec3::new(width, BAR_THICKNESS, FRAME_DEPTH),
    ));
    out.push(cuboid(
        Vec3::new(0.0, frame.bottom_y, 0.0),
        Vec3::new(width, BAR_THICKNESS, FRAME_DEPTH),
    ));
    for side in [-1.0_f32, 1.0] {
        out.push(cuboid(
            Vec3::new(side * (width + BAR_THICKNESS) / 2.0, frame.center_y(), 0.0),
            Vec3::new(BAR_THICKNESS, post_height, FRAME_DEPTH),
        ));
    }
    if let Some(y) = frame.divider_y {
        out.push(cuboid(
            Vec3::new(0.0, y, 0.0),
            Vec3::new(width, DIVIDER_THICKNESS, DIVIDER_DEPTH),
        ));
    }
    let rod_color = srgb_to_linear(ROD_RGB);
    for rod in 0..ROD_COUNT {
        out.push(Primitive {
            shape: Shape::Cylinder,
            transform: Mat4::from_scale_rotation_translation(
                Vec3::new(ROD_RADIUS, frame.rod_length(), ROD_RADIUS),
                glam::Quat::IDENTITY,
                Vec3::new(rod_x(rod), frame.center_y(), 0.0),
            ),
            color: rod_color,
        });
    }
    out
}

/// Local-space centre of a bead.
#[inline]
pub fn bead_center(abacus: &Abacus, id: BeadId) -> Vec3 {
    let b = &abacus[id];
    Vec3::new(rod_x(b.key.rod), b.offset, 0.0)
}

pub fn bead_primitive(abacus: &Abacus, id: BeadId, hovered: bool) -> Primitive {
    let scale = if hovered { HOVER_SCALE } else { 1.0 };
    let radius = abacus.layout().bead_radius() * scale;
    Primitive {
        shape: Shape::Sphere,
        transform: Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            glam::Quat::IDENTITY,
            bead_center(abacus, id),
        ),
        color: srgb_to_linear(BEAD_RGB),
    }
}

/// World-space light direction (towards the light).
#[inline]
pub fn light_direction() -> Vec3 {
    Vec3::from(LIGHT_POSITION).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soroban_frame_has_divider() {
        let free = frame_primitives(Layout::Free);
        let soroban = frame_primitives(Layout::Soroban);
        assert_eq!(free.len(), 4 + ROD_COUNT);
        assert_eq!(soroban.len(), 5 + ROD_COUNT);
        let rods = soroban.iter().filter(|p| p.shape == Shape::Cylinder).count();
        assert_eq!(rods, ROD_COUNT);
    }

    #[test]
    fn hovered_bead_is_larger() {
        let abacus = Abacus::new(Layout::Free);
        let (id, _) = abacus.iter().next().unwrap();
        let plain = bead_primitive(&abacus, id, false).transform;
        let hover = bead_primitive(&abacus, id, true).transform;
        let r0 = plain.x_axis.length();
        let r1 = hover.x_axis.length();
        assert!((r1 / r0 - HOVER_SCALE).abs() < 1e-5);
        assert_eq!(plain.w_axis.truncate(), Vec3::new(-12.0, -3.0, 0.0));
    }

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(srgb_to_linear([0.0, 1.0, 0.0]), [0.0, 1.0, 0.0]);
    }
}
