//! Ordered draw list.
//!
//! The [`Scene`] owns [`SceneObject`]s in insertion order. Each frame it
//! draws the visible ones, in that order, through a
//! [`Painter`](crate::render::Painter). Mutations bump a generation counter
//! so the owner can tell whether the last frame is stale.

mod material;
mod object;
mod shape;

pub use material::{Material, Shading};
pub use object::{SceneObject, Style};
pub use shape::{DrawOutcome, Mesh, Shape};

use crate::render::Painter;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The draw list.
#[derive(Debug, Default)]
pub struct Scene {
    /// `(id, object)` in insertion order.
    objects: Vec<(u32, SceneObject)>,
    next_id: u32,
    generation: u64,
    rendered_generation: u64,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether anything changed since the last [`mark_rendered`](Self::mark_rendered).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the current contents are on screen.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Object management --

    /// Append an object. Returns its id.
    pub fn add(&mut self, object: SceneObject) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.push((id, object));
        self.invalidate();
        id
    }

    /// Remove an object by id.
    pub fn remove(&mut self, id: u32) -> Option<SceneObject> {
        let idx = self.objects.iter().position(|(i, _)| *i == id)?;
        let (_, object) = self.objects.remove(idx);
        self.invalidate();
        Some(object)
    }

    /// Read access to an object.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&SceneObject> {
        self.objects.iter().find(|(i, _)| *i == id).map(|(_, o)| o)
    }

    /// Write access (invalidates).
    pub fn get_mut(&mut self, id: u32) -> Option<&mut SceneObject> {
        self.invalidate();
        self.objects
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, o)| o)
    }

    /// Toggle visibility.
    pub fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some((_, o)) = self.objects.iter_mut().find(|(i, _)| *i == id) {
            if o.visible != visible {
                o.visible = visible;
                self.invalidate();
            }
        }
    }

    /// Objects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &SceneObject)> {
        self.objects.iter().map(|(i, o)| (*i, o))
    }

    /// Number of objects, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.invalidate();
    }

    /// Draw every visible object in list order. Returns how many objects
    /// were drawn.
    pub fn draw(&self, painter: &mut dyn Painter) -> usize {
        let mut drawn = 0;
        for (_, object) in &self.objects {
            if object.visible {
                let _ = object.draw(painter);
                drawn += 1;
            }
        }
        drawn
    }
}
