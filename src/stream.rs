//! The viewport object toolkit adapters drive.
//!
//! A [`Stream`] owns one [`Camera`], one [`GestureDispatcher`], one
//! [`Scene`] and the [`RenderSurface`] it draws into. Adapters feed it
//! [`InputEvent`]s and forward resize and paint notifications; the stream
//! turns input into camera operations and asks the surface for at most one
//! frame at a time.
//!
//! # Usage
//!
//! ```ignore
//! let mut stream = Stream::new(Options::default(), surface);
//! stream.resize(800, 600);
//! let _ = stream.scene_mut().add(SceneObject::new(Mesh::cube(1.0)));
//!
//! // toolkit event
//! let _ = stream.handle_input(&event);
//!
//! // toolkit paint callback
//! if stream.redraw_pending() {
//!     let _ = stream.render_frame();
//! }
//! ```

use crate::camera::Camera;
use crate::command::ViewCommand;
use crate::gesture::GestureDispatcher;
use crate::input::InputEvent;
use crate::options::Options;
use crate::render::RenderSurface;
use crate::scene::Scene;

/// Camera, gesture state, draw list and surface for one viewport.
#[derive(Debug)]
pub struct Stream<S: RenderSurface> {
    camera: Camera,
    dispatcher: GestureDispatcher,
    scene: Scene,
    surface: S,
    /// A frame was requested and has not been rendered yet.
    redraw_pending: bool,
}

impl<S: RenderSurface> Stream<S> {
    /// Build a stream from options. The viewport starts at the camera's
    /// default size until the first [`resize`](Self::resize).
    pub fn new(options: Options, surface: S) -> Self {
        let Options {
            camera,
            gesture,
            keybindings,
        } = options;
        Self {
            camera: Camera::new(&camera),
            dispatcher: GestureDispatcher::new(gesture, &keybindings),
            scene: Scene::new(),
            surface,
            redraw_pending: false,
        }
    }

    /// Feed one input event. Returns the command it triggered, after that
    /// command has been executed.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<ViewCommand> {
        let command = self.dispatcher.handle_event(event, &self.camera)?;
        let _ = self.execute(command);
        Some(command)
    }

    /// Apply a command to the camera and request a redraw.
    ///
    /// Returns the camera operation's result: `false` when a zoom or
    /// magnify was clamped or a rotation degenerated. The redraw is
    /// requested either way.
    pub fn execute(&mut self, command: ViewCommand) -> bool {
        let applied = match command {
            ViewCommand::Home => {
                self.camera.home();
                true
            }
            ViewCommand::Rotate { dx, dy } => self.camera.rotate(dx, dy),
            ViewCommand::Shift { dx, dy } => self.camera.shift(dx, dy),
            ViewCommand::Tilt { angle } => self.camera.tilt(angle),
            ViewCommand::Zoom { rate } => self.camera.zoom(rate),
            ViewCommand::Magnify { angle } => self.camera.magnify(angle),
            ViewCommand::ToggleProjection => {
                self.camera.toggle_projection();
                log::debug!("projection: {:?}", self.camera.projection());
                true
            }
            ViewCommand::Redraw => true,
        };
        self.request_redraw();
        applied
    }

    /// Record a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("resize {width}x{height}");
        self.camera.set_viewport(width, height);
        self.request_redraw();
    }

    /// Ask the surface for a frame unless one is already on its way.
    pub fn request_redraw(&mut self) {
        if !self.redraw_pending {
            self.redraw_pending = true;
            self.surface.request_redraw();
        }
    }

    /// Whether a requested frame has not been rendered yet.
    #[must_use]
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Apply the view transform and draw the visible scene objects.
    ///
    /// Does nothing and returns `false` while the viewport has zero area.
    pub fn render_frame(&mut self) -> bool {
        let (width, height) = self.camera.viewport();
        if width == 0 || height == 0 {
            return false;
        }
        self.redraw_pending = false;
        let view = self.camera.set_view(width, height);
        self.surface.apply_view(&view);
        let drawn = self.scene.draw(&mut self.surface);
        self.scene.mark_rendered();
        log::trace!("frame: {drawn}/{} objects", self.scene.len());
        true
    }

    /// The camera. Mutate it through [`execute`](Self::execute).
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Gesture state.
    #[must_use]
    pub fn dispatcher(&self) -> &GestureDispatcher {
        &self.dispatcher
    }

    /// The draw list.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable draw list. Requests a redraw.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.request_redraw();
        &mut self.scene
    }

    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear down and return the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::Projection;
    use crate::input::{Modifiers, MouseButton, WheelDirection};
    use crate::render::{RecordingSurface, SurfaceCall};
    use crate::scene::{Mesh, SceneObject};

    fn stream() -> Stream<RecordingSurface> {
        Stream::new(Options::default(), RecordingSurface::new())
    }

    fn button(button: MouseButton, pressed: bool, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed,
            x,
            y,
        }
    }

    #[test]
    fn redraw_requests_are_coalesced_until_frame() {
        let mut stream = stream();
        stream.resize(400, 300);
        assert!(stream.execute(ViewCommand::Rotate { dx: 1.0, dy: 0.0 }));
        assert!(stream.execute(ViewCommand::Tilt { angle: 0.1 }));
        assert!(stream.redraw_pending());
        assert_eq!(stream.surface().redraw_requests(), 1);

        assert!(stream.render_frame());
        assert!(!stream.redraw_pending());

        assert!(stream.execute(ViewCommand::Redraw));
        assert_eq!(stream.surface().redraw_requests(), 2);
    }

    #[test]
    fn zero_area_viewport_skips_frame() {
        let mut stream = stream();
        stream.resize(0, 300);
        assert!(!stream.render_frame());
        assert!(stream.redraw_pending());
        assert!(stream.surface().last_view().is_none());
    }

    #[test]
    fn frame_applies_view_before_drawing() {
        let mut stream = stream();
        stream.resize(200, 100);
        let _ = stream.scene_mut().add(SceneObject::new(Mesh::cube(1.0)));
        let _ = stream.surface_mut().take();

        assert!(stream.render_frame());
        let calls = stream.surface().calls();
        assert!(matches!(calls[0], SurfaceCall::ApplyView(_)));
        assert!(matches!(calls[1], SurfaceCall::BeginObject { .. }));
        assert!(matches!(calls.last(), Some(SurfaceCall::EndObject)));
        assert!(!stream.scene().is_dirty());

        let mut camera = Camera::default();
        let expected = camera.set_view(200, 100);
        assert_eq!(stream.surface().last_view(), Some(&expected));
    }

    #[test]
    fn drag_rotates_camera_and_keeps_eye_on_orbit() {
        let mut stream = stream();
        let events = [
            button(MouseButton::Left, true, 100.0, 100.0),
            InputEvent::CursorMoved { x: 140.0, y: 70.0 },
            InputEvent::CursorMoved { x: 160.0, y: 90.0 },
            button(MouseButton::Left, false, 160.0, 90.0),
        ];
        let commands: Vec<_> =
            events.iter().filter_map(|e| stream.handle_input(e)).collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2], ViewCommand::Redraw);

        let camera = stream.camera();
        assert!(camera.basis().is_orthonormal(1e-4));
        let expected = camera.focus() + camera.basis().forward * camera.distance();
        assert!(camera.eye().abs_diff_eq(expected, 1e-4));
        assert!(!camera.basis().forward.abs_diff_eq(Vec3::Z, 1e-3));
        assert_eq!(stream.surface().redraw_requests(), 1);
    }

    #[test]
    fn clamped_scroll_still_redraws() {
        let mut stream = stream();
        let _ = stream.handle_input(&InputEvent::ModifiersChanged(Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }));
        let wheel = InputEvent::Wheel {
            direction: WheelDirection::Down,
            x: 0.0,
            y: 0.0,
        };
        // 30 → 37.5 → 46.9 → 58.6 → 73.2 → 91.6 → 114.4 (refused)
        for _ in 0..5 {
            assert!(stream.handle_input(&wheel).is_some());
        }
        let before = stream.camera().distance();
        assert!(!stream.execute(ViewCommand::Zoom { rate: 0.8 }));
        assert_eq!(stream.camera().distance(), before);
        assert!(stream.redraw_pending());
    }

    #[test]
    fn projection_key_flips_projection() {
        let mut stream = stream();
        let _ = stream.handle_input(&InputEvent::KeyPressed { key: "p".into() });
        assert_eq!(stream.camera().projection(), Projection::Orthogonal);
        // Orthogonal refuses magnify.
        assert!(!stream.execute(ViewCommand::Magnify { angle: 0.1 }));
    }

    #[test]
    fn home_restores_axes() {
        let mut stream = stream();
        assert!(stream.execute(ViewCommand::Shift { dx: 2.0, dy: -1.0 }));
        assert!(stream.execute(ViewCommand::Tilt { angle: 0.4 }));
        let _ = stream.handle_input(&InputEvent::KeyPressed {
            key: "home".into(),
        });
        let camera = stream.camera();
        assert_eq!(camera.focus(), Vec3::ZERO);
        assert_eq!(camera.basis().forward, Vec3::Z);
        assert_eq!(camera.basis().up, Vec3::Y);
        assert_eq!(camera.eye(), Vec3::Z * camera.distance());
    }
}
