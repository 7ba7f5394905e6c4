use glam::Vec3;

use super::material::Shading;
use super::shape::{DrawOutcome, Shape};
use crate::render::Painter;

/// Which passes an object draws, and whether it blends.
///
/// Dots and wireframe draw without depth writes; solid faces write depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Style {
    /// Point pass.
    pub dots: bool,
    /// Wireframe pass.
    pub wire: bool,
    /// Solid pass.
    pub solid: bool,
    /// Source-alpha blending for all passes.
    pub blend: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            dots: false,
            wire: true,
            solid: true,
            blend: false,
        }
    }
}

impl Style {
    /// Points only.
    pub const DOTS: Self = Self {
        dots: true,
        wire: false,
        solid: false,
        blend: false,
    };

    /// Wireframe only.
    pub const WIRE: Self = Self {
        dots: false,
        wire: true,
        solid: false,
        blend: false,
    };

    /// Filled faces only.
    pub const SOLID: Self = Self {
        dots: false,
        wire: false,
        solid: true,
        blend: false,
    };

    /// Same passes with blending on.
    #[must_use]
    pub fn blended(self) -> Self {
        Self {
            blend: true,
            ..self
        }
    }
}

/// One entry of the draw list.
#[derive(Debug)]
pub struct SceneObject {
    /// Translation applied to the shape.
    pub position: Vec3,
    /// Color or material.
    pub shading: Shading,
    /// Passes to draw.
    pub style: Style,
    /// Skipped entirely when false.
    pub visible: bool,
    shape: Box<dyn Shape>,
}

impl SceneObject {
    /// Visible object at the origin with default shading and style.
    #[must_use]
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self {
            position: Vec3::ZERO,
            shading: Shading::default(),
            style: Style::default(),
            visible: true,
            shape: Box::new(shape),
        }
    }

    /// Builder: set position.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: set shading.
    #[must_use]
    pub fn shaded(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    /// Builder: set style.
    #[must_use]
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The wrapped shape.
    #[must_use]
    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Run the enabled passes. Returns the number of passes that drew
    /// something; zero for a hidden object, which emits nothing at all.
    pub fn draw(&self, painter: &mut dyn Painter) -> usize {
        if !self.visible {
            return 0;
        }
        painter.begin_object(self.position, &self.shading, self.style.blend);
        let shape = self.shape.as_ref();
        let mut outcomes = Vec::with_capacity(3);
        if self.style.dots {
            painter.set_depth_write(false);
            outcomes.push(shape.draw_dots(painter));
        }
        if self.style.wire {
            painter.set_depth_write(false);
            outcomes.push(shape.draw_line(painter));
        }
        if self.style.solid {
            painter.set_depth_write(true);
            outcomes.push(shape.draw_face(painter));
        }
        painter.end_object();
        outcomes
            .into_iter()
            .filter(|&o| o == DrawOutcome::Drawn)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingSurface, SurfaceCall};
    use crate::scene::{Material, Mesh};

    fn triangle() -> Mesh {
        Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn default_style_draws_wire_then_solid() {
        let object = SceneObject::new(triangle()).at(Vec3::Z);
        let mut surface = RecordingSurface::new();
        assert_eq!(object.draw(&mut surface), 2);

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(
            calls[0],
            SurfaceCall::BeginObject {
                position: Vec3::Z,
                shading: Shading::Material(Material::WHITE),
                blend: false,
            }
        );
        assert_eq!(calls[1], SurfaceCall::SetDepthWrite(false));
        assert!(matches!(&calls[2], SurfaceCall::Lines(l) if l.len() == 3));
        assert_eq!(calls[3], SurfaceCall::SetDepthWrite(true));
        assert!(matches!(&calls[4], SurfaceCall::Triangles(t) if t.len() == 1));
        assert_eq!(calls[5], SurfaceCall::EndObject);
    }

    #[test]
    fn hidden_object_emits_nothing() {
        let mut object = SceneObject::new(triangle());
        object.visible = false;
        let mut surface = RecordingSurface::new();
        assert_eq!(object.draw(&mut surface), 0);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn blended_dots() {
        let object = SceneObject::new(triangle())
            .styled(Style::DOTS.blended())
            .shaded(Shading::Rgba([1.0, 0.0, 0.0, 0.5]));
        let mut surface = RecordingSurface::new();
        assert_eq!(object.draw(&mut surface), 1);
        assert!(matches!(
            surface.calls()[0],
            SurfaceCall::BeginObject { blend: true, .. }
        ));
        assert!(matches!(&surface.calls()[2], SurfaceCall::Points(p) if p.len() == 3));
    }
}
