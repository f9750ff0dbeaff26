//! Scene state
//!
//! The mutable heart of the crate: entity variants, the store that owns them,
//! and the camera and lighting the present stage reads alongside them.

mod camera;
mod entity;
mod lighting;
mod store;

pub use camera::Camera;
pub use entity::{
    CelestialBody, DustCloud, EmissiveParams, FlameSprite, StarPoint, ThrusterLight, Vehicle,
};
pub use lighting::{Light, LightType, LightingEnvironment};
pub use store::SceneStore;
