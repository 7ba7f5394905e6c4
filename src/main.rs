//! Headless replay: feeds a recorded JSON event script through a viewport
//! stream and reports the resulting camera.
//!
//! ```text
//! lookout <script.json> [options.toml]
//! ```

use std::path::Path;

use lookout::input::load_script;
use lookout::render::RecordingSurface;
use lookout::scene::{Mesh, SceneObject};
use lookout::{LookoutError, Options, Stream};

/// Replay `script`; returns the stream and the number of frames rendered.
fn replay(
    script: &Path,
    options: Option<&Path>,
) -> Result<(Stream<RecordingSurface>, usize), LookoutError> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let events = load_script(script)?;
    log::info!("replaying {} events from {}", events.len(), script.display());

    let mut stream = Stream::new(options, RecordingSurface::new());
    let (width, height) = stream.camera().viewport();
    stream.resize(width, height);
    let _ = stream.scene_mut().add(SceneObject::new(Mesh::cube(1.0)));

    let mut frames = 0;
    for event in &events {
        if let Some(command) = stream.handle_input(event) {
            log::debug!("{event:?} -> {command:?}");
        }
        if stream.redraw_pending() && stream.render_frame() {
            frames += 1;
            let _ = stream.surface_mut().take();
        }
    }
    Ok((stream, frames))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(script) = args.first() else {
        log::error!("Usage: lookout <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options = args.get(1).map(Path::new);

    let (stream, frames) = match replay(Path::new(script), options) {
        Ok(result) => result,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let camera = stream.camera();
    let basis = camera.basis();
    log::info!("{frames} frames rendered");
    log::info!(
        "camera: {:?} fovy={:.4} distance={:.4}",
        camera.projection(),
        camera.fovy(),
        camera.distance()
    );
    log::info!("  eye     = {}", camera.eye());
    log::info!("  focus   = {}", camera.focus());
    log::info!("  forward = {}", basis.forward);
    log::info!("  up      = {}", basis.up);
    log::info!("  right   = {}", basis.right);
}
