//! Unit meshes for the three shapes the scene is built from.
//!
//! Cube: side 1 centred on the origin. Cylinder: radius 1, height 1 along Y.
//! Sphere: radius 1. The scene scales them per instance.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Cylinder,
    Sphere,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Cube, Shape::Cylinder, Shape::Sphere];

    pub fn mesh(self) -> MeshData {
        match self {
            Shape::Cube => cube(),
            Shape::Cylinder => cylinder(16),
            Shape::Sphere => uv_sphere(24, 24),
        }
    }
}

pub fn cube() -> MeshData {
    // (normal, u, v) with u x v = normal so each face winds counter-clockwise.
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let base = mesh.vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let pos = [0, 1, 2].map(|k| 0.5 * (n[k] + su * u[k] + sv * v[k]));
            mesh.vertices.push(Vertex { pos, normal: n });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

pub fn cylinder(segments: u16) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    // side: a bottom/top pair per ring step, first step repeated to close the seam
    for i in 0..=segments {
        let a = TAU * i as f32 / segments as f32;
        let (x, z) = (a.cos(), a.sin());
        for y in [-0.5, 0.5] {
            mesh.vertices.push(Vertex {
                pos: [x, y, z],
                normal: [x, 0.0, z],
            });
        }
    }
    for i in 0..segments {
        let b0 = 2 * i;
        let (t0, b1, t1) = (b0 + 1, b0 + 2, b0 + 3);
        mesh.indices.extend_from_slice(&[b0, t0, b1, b1, t0, t1]);
    }
    // caps
    for (y, ny) in [(0.5_f32, 1.0_f32), (-0.5, -1.0)] {
        let center = mesh.vertices.len() as u16;
        mesh.vertices.push(Vertex {
            pos: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        for i in 0..segments {
            let a = TAU * i as f32 / segments as f32;
            mesh.vertices.push(Vertex {
                pos: [a.cos(), y, a.sin()],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..segments {
            let cur = center + 1 + i;
            let next = center + 1 + (i + 1) % segments;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, next, cur]);
            } else {
                mesh.indices.extend_from_slice(&[center, cur, next]);
            }
        }
    }
    mesh
}

pub fn uv_sphere(stacks: u16, slices: u16) -> MeshData {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let mut mesh = MeshData::default();
    for st in 0..=stacks {
        let phi = PI * st as f32 / stacks as f32;
        let (ring, y) = (phi.sin(), phi.cos());
        for sl in 0..=slices {
            let theta = TAU * sl as f32 / slices as f32;
            let p = [ring * theta.cos(), y, ring * theta.sin()];
            mesh.vertices.push(Vertex { pos: p, normal: p });
        }
    }
    let row = slices + 1;
    for st in 0..stacks {
        for sl in 0..slices {
            let a = st * row + sl;
            let b = a + row;
            mesh.indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(m: &MeshData) -> bool {
        m.indices.iter().all(|&i| (i as usize) < m.vertices.len())
    }

    #[test]
    fn meshes_are_indexed_triangles() {
        for shape in Shape::ALL {
            let m = shape.mesh();
            assert!(!m.vertices.is_empty());
            assert_eq!(m.indices.len() % 3, 0, "{shape:?}");
            assert!(indices_in_range(&m), "{shape:?}");
        }
    }

    #[test]
    fn cube_spans_unit_extent() {
        let m = cube();
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.indices.len(), 36);
        for v in &m.vertices {
            assert!(v.pos.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
        }
    }

    #[test]
    fn sphere_normals_are_unit() {
        let m = uv_sphere(8, 12);
        for v in &m.vertices {
            let len = v.normal.iter().map(|c| c * c).sum::<f32>().sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }
}
