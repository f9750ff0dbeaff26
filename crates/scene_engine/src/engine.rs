//! Run loop
//!
//! [`Engine`] owns the scene and drives one frame at a time: pump resolved
//! assets, advance the animation, settle the camera, present. The per-frame
//! scene mutation lives in [`crate::animation::AnimationDriver::advance`] and
//! can be called directly with any timestamp; the engine only adds clocking,
//! scheduling, and the start/stop lifecycle.

use crate::animation::AnimationDriver;
use crate::assets::{AssetResolver, AssetSlot, LoadedAsset};
use crate::config::SceneConfig;
use crate::control::CameraRig;
use crate::foundation::time::FrameClock;
use crate::render::{PresentError, PresentStage, Viewport};
use crate::scene::SceneStore;

/// External events fed into the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The output surface was resized
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// The host asked the loop to stop
    CloseRequested,
}

/// Scene run loop with an explicit start/stop lifecycle
pub struct Engine {
    config: SceneConfig,
    scene: SceneStore,
    resolver: AssetResolver,
    driver: AnimationDriver,
    rig: Box<dyn CameraRig>,
    presenter: Box<dyn PresentStage>,
    clock: FrameClock,
    running: bool,
    frame_cap: Option<u64>,
}

impl Engine {
    /// Create an engine around an already-bootstrapped scene
    pub fn new(
        config: SceneConfig,
        scene: SceneStore,
        presenter: Box<dyn PresentStage>,
        rig: Box<dyn CameraRig>,
    ) -> Self {
        let driver = AnimationDriver::new(config.clone());
        Self {
            config,
            scene,
            resolver: AssetResolver::new(),
            driver,
            rig,
            presenter,
            clock: FrameClock::new(),
            running: false,
            frame_cap: None,
        }
    }

    /// Stop automatically after `frames` frames; useful for headless runs
    pub fn with_frame_cap(mut self, frames: u64) -> Self {
        self.frame_cap = Some(frames);
        self
    }

    /// The scene state
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Mutable scene state
    pub fn scene_mut(&mut self) -> &mut SceneStore {
        &mut self.scene
    }

    /// The asset resolver, for issuing load requests
    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// The scene configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Number of frames run so far
    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    /// Whether the loop is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Attach an asset resolved by host machinery, bypassing the built-in
    /// background loader.
    pub fn resolve_asset(&mut self, slot: AssetSlot, asset: LoadedAsset) {
        self.resolver.apply(&mut self.scene, slot, asset, &self.config);
    }

    /// Run a single frame: tick the clock, pump resolved assets, advance the
    /// animation with the elapsed wall-clock time, settle the camera, and
    /// present.
    pub fn frame(&mut self) -> Result<(), PresentError> {
        self.clock.tick();
        self.resolver.pump(&mut self.scene, &self.config);
        self.driver.advance(&mut self.scene, self.clock.elapsed_seconds());
        self.rig.settle(&mut self.scene.camera, self.clock.delta_seconds());
        self.presenter.present(&self.scene)
    }

    /// Run frames until [`Engine::stop`] is called, the frame cap is
    /// reached, or presenting fails.
    pub fn run(&mut self) -> Result<(), PresentError> {
        self.running = true;
        log::info!("Starting frame loop");
        while self.running {
            self.frame()?;
            if let Some(cap) = self.frame_cap {
                if self.clock.frames() >= cap {
                    log::info!("Frame cap of {} reached", cap);
                    self.stop();
                }
            }
        }
        log::info!("Frame loop stopped after {} frames", self.clock.frames());
        Ok(())
    }

    /// Request loop shutdown; the current frame finishes normally
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Handle an external event
    pub fn handle_event(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::WindowResized { width, height } => {
                self.scene.resize(width, height);
                self.presenter.resize(Viewport::new(width, height));
            }
            SceneEvent::CloseRequested => self.stop(),
        }
    }
}
