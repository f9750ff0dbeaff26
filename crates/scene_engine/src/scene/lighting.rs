//! Scene lighting

use crate::foundation::math::Vec3;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Directional light (parallel rays)
    Directional,
    /// Point light
    Point,
}

/// Light source
#[derive(Debug, Clone)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Position (point lights)
    pub position: Vec3,
    /// Direction (directional lights)
    pub direction: Vec3,
    /// Color (linear RGB)
    pub color: Vec3,
    /// Intensity
    pub intensity: f32,
    /// Range (point lights)
    pub range: f32,
}

impl Light {
    /// Create a directional light
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            position: Vec3::zeros(),
            direction: direction.normalize(),
            color,
            intensity,
            range: 0.0,
        }
    }

    /// Create a point light
    pub fn point(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            direction: Vec3::zeros(),
            color,
            intensity,
            range,
        }
    }
}

/// All lights in the scene plus the ambient term
#[derive(Debug, Clone)]
pub struct LightingEnvironment {
    /// Light list
    pub lights: Vec<Light>,
    /// Ambient light color
    pub ambient_color: Vec3,
    /// Ambient light intensity
    pub ambient_intensity: f32,
}

impl Default for LightingEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl LightingEnvironment {
    /// Create an empty lighting environment
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_intensity: 0.1,
        }
    }

    /// Add a light (builder style)
    pub fn add_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set ambient lighting (builder style)
    pub fn with_ambient(mut self, color: Vec3, intensity: f32) -> Self {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
        self
    }

    /// Deep-space illumination: one white fill light shining toward the
    /// origin from (5, 5, 5) plus a dim gray ambient term.
    pub fn deep_space() -> Self {
        Self::new()
            .with_ambient(Vec3::new(0.25, 0.25, 0.25), 1.0)
            .add_light(Light::directional(
                Vec3::new(-5.0, -5.0, -5.0),
                Vec3::new(1.0, 1.0, 1.0),
                1.0,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_lights_are_normalized() {
        let light = Light::directional(Vec3::new(0.0, -2.0, 0.0), Vec3::new(1.0, 1.0, 1.0), 1.0);
        assert!((light.direction.magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn deep_space_has_fill_light() {
        let env = LightingEnvironment::deep_space();
        assert_eq!(env.lights.len(), 1);
        assert_eq!(env.lights[0].light_type, LightType::Directional);
    }
}
