//! Drawable geometry.
//!
//! A [`Shape`] supplies up to three passes. The object wrapping it decides
//! which passes run and sets up shading, blending and depth writes around
//! them; the shape only emits primitives in object-local coordinates.

use glam::Vec3;
use rustc_hash::FxHashSet;

use crate::render::Painter;

/// Result of asking a shape for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Primitives were emitted.
    Drawn,
    /// The shape has no geometry for this pass.
    NotApplicable,
}

/// Geometry with optional point, wireframe and solid passes.
pub trait Shape: std::fmt::Debug {
    /// Emit the point cloud.
    fn draw_dots(&self, _painter: &mut dyn Painter) -> DrawOutcome {
        DrawOutcome::NotApplicable
    }

    /// Emit the wireframe.
    fn draw_line(&self, _painter: &mut dyn Painter) -> DrawOutcome {
        DrawOutcome::NotApplicable
    }

    /// Emit the filled faces.
    fn draw_face(&self, _painter: &mut dyn Painter) -> DrawOutcome {
        DrawOutcome::NotApplicable
    }
}

/// Indexed triangle mesh. Supports every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    /// Unique undirected edges, `a < b`, in first-seen order.
    edges: Vec<[u32; 2]>,
}

impl Mesh {
    /// Build a mesh, or `None` if a face indexes past `vertices`.
    #[must_use]
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Option<Self> {
        let count = vertices.len();
        if faces.iter().flatten().any(|&i| i as usize >= count) {
            return None;
        }
        Some(Self::indexed(vertices, faces))
    }

    fn indexed(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        let mut seen = FxHashSet::default();
        let mut edges = Vec::new();
        for &[a, b, c] in &faces {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let edge = [p.min(q), p.max(q)];
                if seen.insert(edge) {
                    edges.push(edge);
                }
            }
        }
        Self {
            vertices,
            faces,
            edges,
        }
    }

    /// Axis-aligned cube centered at the origin, counter-clockwise faces.
    #[must_use]
    pub fn cube(half: f32) -> Self {
        let vertices = (0..8)
            .map(|i| {
                let sign = |bit: u32| if i & bit == 0 { -half } else { half };
                Vec3::new(sign(1), sign(2), sign(4))
            })
            .collect();
        // Two triangles per side: -z, +z, -y, +y, -x, +x.
        let faces = vec![
            [0, 2, 3],
            [0, 3, 1],
            [4, 5, 7],
            [4, 7, 6],
            [0, 1, 5],
            [0, 5, 4],
            [2, 6, 7],
            [2, 7, 3],
            [0, 4, 6],
            [0, 6, 2],
            [1, 3, 7],
            [1, 7, 5],
        ];
        Self::indexed(vertices, faces)
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle indices.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Unique edges.
    #[must_use]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    fn at(&self, i: u32) -> Vec3 {
        self.vertices[i as usize]
    }
}

impl Shape for Mesh {
    fn draw_dots(&self, painter: &mut dyn Painter) -> DrawOutcome {
        painter.points(&self.vertices);
        DrawOutcome::Drawn
    }

    fn draw_line(&self, painter: &mut dyn Painter) -> DrawOutcome {
        let lines: Vec<[Vec3; 2]> =
            self.edges.iter().map(|&[a, b]| [self.at(a), self.at(b)]).collect();
        painter.lines(&lines);
        DrawOutcome::Drawn
    }

    fn draw_face(&self, painter: &mut dyn Painter) -> DrawOutcome {
        let triangles: Vec<[Vec3; 3]> = self
            .faces
            .iter()
            .map(|&[a, b, c]| [self.at(a), self.at(b), self.at(c)])
            .collect();
        painter.triangles(&triangles);
        DrawOutcome::Drawn
    }
}
