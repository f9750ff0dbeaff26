//! Scene configuration
//!
//! All tunable constants of the scene live here: camera placement, starfield
//! and dust population sizes, orbit and spin rates, thruster pulse shape, and
//! flame flicker bands. A TOML file can override any section; the defaults
//! describe the stock scene.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed as TOML
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config values failed validation
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level scene configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    /// Initial viewport size
    pub viewport: ViewportConfig,

    /// Camera placement and projection
    pub camera: CameraConfig,

    /// Sun model and glow
    pub sun: SunConfig,

    /// Rocket model
    pub vehicle: VehicleConfig,

    /// Rocket orbit path
    pub orbit: OrbitConfig,

    /// Per-frame self-rotation increments
    pub spin: SpinConfig,

    /// Thruster light pulse
    pub thruster: ThrusterConfig,

    /// Flame sprite flicker
    pub flame: FlameConfig,

    /// Background starfield
    pub starfield: StarfieldConfig,

    /// Dust particle cloud
    pub dust: DustConfig,
}

/// Initial viewport size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Camera placement and projection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,

    /// Distance from the origin along +Z at startup
    pub distance: f32,

    /// Near clipping plane
    pub near: f32,

    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            distance: 40.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Sun model scale and glow parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// Uniform model scale
    pub scale: f32,

    /// Emissive color (linear RGB)
    pub emissive_color: [f32; 3],

    /// Emissive intensity
    pub emissive_intensity: f32,

    /// Intensity of the point light added at the sun's position
    pub light_intensity: f32,

    /// Range of the sun point light
    pub light_range: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            scale: 0.2,
            emissive_color: [1.0, 0.667, 0.0],
            emissive_intensity: 1.5,
            light_intensity: 1.5,
            light_range: 200.0,
        }
    }
}

/// Rocket model parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Uniform model scale
    pub scale: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self { scale: 0.25 }
    }
}

/// Rocket orbit path parameters.
///
/// The orbital angle is `elapsed_seconds * angular_speed`, so the rocket's
/// position is a pure function of wall-clock time and independent of frame
/// rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Orbit circle radius, centered at the origin
    pub radius: f32,

    /// Angular speed in radians per second
    pub angular_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            angular_speed: 0.5,
        }
    }
}

/// Per-frame self-rotation increments, in radians per frame.
///
/// Unlike the orbit these accumulate per `advance` call, so the visible spin
/// rate scales with frame rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Sun yaw increment per frame
    pub sun_increment: f32,

    /// Rocket yaw increment per frame
    pub rocket_increment: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            sun_increment: 0.001,
            rocket_increment: 0.01,
        }
    }
}

/// Thruster light pulse parameters: intensity oscillates sinusoidally around
/// `baseline` with the given `amplitude` and `frequency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrusterConfig {
    /// Center of the intensity oscillation
    pub baseline: f32,

    /// Oscillation amplitude
    pub amplitude: f32,

    /// Oscillation frequency in radians per second
    pub frequency: f32,

    /// Light color (linear RGB)
    pub color: [f32; 3],

    /// Light range
    pub range: f32,

    /// Offset from the rocket origin, in rocket-local space
    pub offset: [f32; 3],
}

impl Default for ThrusterConfig {
    fn default() -> Self {
        Self {
            baseline: 1.0,
            amplitude: 1.0,
            frequency: 10.0,
            color: [1.0, 0.647, 0.0],
            range: 5.0,
            offset: [0.0, -1.0, -2.0],
        }
    }
}

/// Flame sprite flicker parameters.
///
/// Every frame the flame's width factor and opacity are redrawn uniformly
/// from their bands; the height is the width times `height_ratio`. The
/// flicker is intentionally uncorrelated across frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    /// Lower bound of the width scale band (inclusive)
    pub scale_min: f32,

    /// Upper bound of the width scale band (exclusive)
    pub scale_max: f32,

    /// Height scale as a multiple of the width scale
    pub height_ratio: f32,

    /// Lower bound of the opacity band (inclusive)
    pub opacity_min: f32,

    /// Upper bound of the opacity band (exclusive)
    pub opacity_max: f32,

    /// Opacity before the first flicker frame
    pub base_opacity: f32,

    /// Additive tint color (linear RGB)
    pub tint: [f32; 3],

    /// Offset from the rocket origin, in rocket-local space
    pub offset: [f32; 3],
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.4,
            scale_max: 0.6,
            height_ratio: 2.0,
            opacity_min: 0.7,
            opacity_max: 1.0,
            base_opacity: 0.8,
            tint: [1.0, 0.333, 0.0],
            offset: [0.0, -1.2, -1.5],
        }
    }
}

/// Starfield population parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars
    pub count: usize,

    /// Cubic placement bound: positions are uniform in [-spread/2, spread/2)
    /// on every axis
    pub spread: f32,

    /// Lower bound of the per-star pulse speed band, radians per second
    pub pulse_speed_min: f32,

    /// Upper bound of the per-star pulse speed band, radians per second
    pub pulse_speed_max: f32,

    /// Twinkle scale amplitude
    pub twinkle_amplitude: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            spread: 200.0,
            pulse_speed_min: 10.0,
            pulse_speed_max: 30.0,
            twinkle_amplitude: 0.3,
        }
    }
}

/// Dust cloud population parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DustConfig {
    /// Number of dust points
    pub count: usize,

    /// Cubic placement bound, same convention as the starfield
    pub spread: f32,

    /// Point sprite size
    pub point_size: f32,

    /// Cloud opacity
    pub opacity: f32,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            spread: 200.0,
            point_size: 0.2,
            opacity: 0.5,
        }
    }
}

impl SceneConfig {
    /// Load configuration from a TOML file and validate it
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values describe a usable scene
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orbit.radius <= 0.0 {
            return Err(ConfigError::Invalid("orbit.radius must be positive".into()));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(
                "camera planes must satisfy 0 < near < far".into(),
            ));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid("viewport must be non-empty".into()));
        }
        if self.starfield.pulse_speed_min >= self.starfield.pulse_speed_max {
            return Err(ConfigError::Invalid(
                "starfield pulse speed band must be ordered".into(),
            ));
        }
        if self.flame.scale_min >= self.flame.scale_max {
            return Err(ConfigError::Invalid("flame scale band must be ordered".into()));
        }
        if self.flame.opacity_min >= self.flame.opacity_max || self.flame.opacity_max > 1.0 {
            return Err(ConfigError::Invalid(
                "flame opacity band must be ordered and within [0, 1]".into(),
            ));
        }
        if self.thruster.amplitude < 0.0 || self.thruster.frequency <= 0.0 {
            return Err(ConfigError::Invalid(
                "thruster pulse must have non-negative amplitude and positive frequency".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SceneConfig::default().validate().expect("defaults must be valid");
    }

    #[test]
    fn toml_round_trip_preserves_defaults() {
        let config = SceneConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.starfield.count, config.starfield.count);
        assert_eq!(parsed.orbit.radius, config.orbit.radius);
        assert_eq!(parsed.flame.height_ratio, config.flame.height_ratio);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let parsed: SceneConfig = toml::from_str("[orbit]\nradius = 30.0\n").unwrap();
        assert_eq!(parsed.orbit.radius, 30.0);
        assert_eq!(parsed.starfield.count, StarfieldConfig::default().count);
    }

    #[test]
    fn bad_bands_are_rejected() {
        let mut config = SceneConfig::default();
        config.starfield.pulse_speed_min = 50.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SceneConfig::default();
        config.orbit.radius = 0.0;
        assert!(config.validate().is_err());
    }
}
