//! Present-stage seam
//!
//! Rasterization is an external collaborator: each frame the engine hands the
//! current scene to a [`PresentStage`] implementation and nothing more. The
//! crate ships [`HeadlessPresenter`] for tests and headless runs; a real
//! renderer plugs in behind the same trait.

mod mesh;

pub use mesh::{Mesh, Vertex};

use crate::scene::SceneStore;
use thiserror::Error;

/// Present-stage errors
#[derive(Error, Debug)]
pub enum PresentError {
    /// The output surface was lost or never existed
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The backend rejected the frame
    #[error("Present failed: {0}")]
    PresentFailed(String),
}

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height ratio
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Consumes the scene once per frame and presents it to the viewport.
///
/// Implementations must not mutate scene state; the engine owns all mutation.
pub trait PresentStage {
    /// Present the current scene state
    fn present(&mut self, scene: &SceneStore) -> Result<(), PresentError>;

    /// The output surface was resized
    fn resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }
}

/// Present stage that rasterizes nothing.
///
/// Counts frames and periodically logs a scene summary. Used by tests and by
/// the demo binary when no rendering backend is attached.
pub struct HeadlessPresenter {
    frames_presented: u64,
    log_every: u64,
    viewport: Viewport,
}

impl HeadlessPresenter {
    /// Create a headless presenter logging a summary every `log_every` frames
    pub fn new(viewport: Viewport, log_every: u64) -> Self {
        Self {
            frames_presented: 0,
            log_every: log_every.max(1),
            viewport,
        }
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl PresentStage for HeadlessPresenter {
    fn present(&mut self, scene: &SceneStore) -> Result<(), PresentError> {
        self.frames_presented += 1;
        if self.frames_presented % self.log_every == 0 {
            log::debug!(
                "frame {}: {}x{}, sun={}, rocket={}, {} stars, {} dust points",
                self.frames_presented,
                self.viewport.width,
                self.viewport.height,
                scene.sun.is_some(),
                scene.rocket.is_some(),
                scene.stars.len(),
                scene.dust.as_ref().map_or(0, |d| d.positions.len()),
            );
        }
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
