//! Scene entity variants
//!
//! Plain data structs, one per visual object kind. Each carries exactly the
//! transform and material parameters its per-frame update rule touches;
//! the rules themselves live in the animation module.

use crate::assets::TextureData;
use crate::foundation::math::{Transform, Vec2, Vec3};
use crate::render::Mesh;

/// Emissive material parameters
#[derive(Debug, Clone, PartialEq)]
pub struct EmissiveParams {
    /// Emissive color (linear RGB)
    pub color: Vec3,

    /// Emissive intensity multiplier
    pub intensity: f32,
}

/// The sun: a glowing body spinning in place at the origin.
///
/// The spin angle accumulates a fixed increment per frame.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Model geometry
    pub mesh: Mesh,

    /// World transform
    pub transform: Transform,

    /// Accumulated yaw in radians
    pub spin_angle: f32,

    /// Glow parameters
    pub emissive: EmissiveParams,
}

impl CelestialBody {
    /// Create a body at the origin with a uniform scale
    pub fn new(mesh: Mesh, scale: f32, emissive: EmissiveParams) -> Self {
        Self {
            mesh,
            transform: Transform::from_position_scale(Vec3::zeros(), scale),
            spin_angle: 0.0,
            emissive,
        }
    }
}

/// The rocket: orbits the origin and spins about its own axis.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Model geometry
    pub mesh: Mesh,

    /// World transform; position is rewritten every frame from the orbit rule
    pub transform: Transform,

    /// Accumulated yaw in radians
    pub spin_angle: f32,
}

impl Vehicle {
    /// Create a vehicle at the origin with a uniform scale
    pub fn new(mesh: Mesh, scale: f32) -> Self {
        Self {
            mesh,
            transform: Transform::from_position_scale(Vec3::zeros(), scale),
            spin_angle: 0.0,
        }
    }
}

/// Point light glowing behind the rocket's thruster.
///
/// `offset` is rocket-local; the present stage composes it with the rocket
/// transform. Intensity is rewritten every frame by the pulse rule.
#[derive(Debug, Clone)]
pub struct ThrusterLight {
    /// Light color (linear RGB)
    pub color: Vec3,

    /// Current intensity
    pub intensity: f32,

    /// Light range
    pub range: f32,

    /// Offset from the rocket origin, rocket-local
    pub offset: Vec3,
}

/// Additively blended flame billboard behind the rocket.
///
/// Scale and opacity are redrawn independently every frame; the texture is
/// absent until its own asset resolves.
#[derive(Debug, Clone)]
pub struct FlameSprite {
    /// Billboard scale (width, height)
    pub scale: Vec2,

    /// Current opacity
    pub opacity: f32,

    /// Additive tint color (linear RGB)
    pub tint: Vec3,

    /// Offset from the rocket origin, rocket-local
    pub offset: Vec3,

    /// Flame texture, once resolved
    pub texture: Option<TextureData>,
}

/// One background star.
///
/// The pulse speed is frozen at creation so stars twinkle permanently out of
/// phase with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPoint {
    /// World position
    pub position: Vec3,

    /// Current uniform scale
    pub scale: f32,

    /// Twinkle frequency in radians per second, fixed at creation
    pub pulse_speed: f32,
}

/// Static dust cloud. Built once, never updated.
#[derive(Debug, Clone)]
pub struct DustCloud {
    /// Point positions
    pub positions: Vec<Vec3>,

    /// Point sprite size
    pub point_size: f32,

    /// Cloud opacity
    pub opacity: f32,
}
