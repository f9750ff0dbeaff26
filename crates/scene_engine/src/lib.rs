//! # Scene Engine
//!
//! Core of a small animated 3D space scene: a glowing sun, a rocket orbiting
//! it, a twinkling starfield, and a static dust cloud.
//!
//! The crate owns scene state and its per-frame evolution; rasterization,
//! input handling, and window management are external collaborators reached
//! through the [`render::PresentStage`] and [`control::CameraRig`] seams.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneConfig::default();
//!     let mut scene = SceneStore::new(&config);
//!     scene.populate(&config, &mut rand::thread_rng());
//!
//!     let presenter = HeadlessPresenter::new(scene.viewport, 120);
//!     let rig = DampedOrbitRig::new(config.camera.distance);
//!     let mut engine = Engine::new(config, scene, Box::new(presenter), Box::new(rig));
//!
//!     engine.resolver().request(AssetSlot::SunModel, "resources/models/sun.obj");
//!     engine.resolver().request(AssetSlot::RocketModel, "resources/models/rocket.obj");
//!
//!     engine.run()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod control;
pub mod foundation;
pub mod render;
pub mod scene;

mod engine;

pub use engine::{Engine, SceneEvent};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        animation::AnimationDriver,
        assets::{AssetError, AssetResolver, AssetSlot, LoadedAsset, TextureData},
        config::{ConfigError, SceneConfig},
        control::{CameraRig, DampedOrbitRig},
        foundation::{
            math::{Mat4, Transform, Vec2, Vec3},
            time::FrameClock,
        },
        render::{HeadlessPresenter, Mesh, PresentError, PresentStage, Viewport},
        scene::{Camera, SceneStore},
        Engine, SceneEvent,
    };
}
