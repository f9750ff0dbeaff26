//! Scene state store
//!
//! Single owner of every mutable visual entity plus the camera, lighting,
//! and viewport. The animation driver mutates it each frame; asset
//! resolution attaches entities to it as loads complete. Sun, rocket,
//! thruster, and flame are optional until their assets resolve, and every
//! consumer must tolerate their absence.

use crate::assets::TextureData;
use crate::config::SceneConfig;
use crate::foundation::math::{Vec2, Vec3};
use crate::render::{Mesh, Viewport};
use crate::scene::{
    Camera, CelestialBody, DustCloud, EmissiveParams, FlameSprite, Light, LightingEnvironment,
    StarPoint, ThrusterLight, Vehicle,
};
use rand::Rng;

/// Owner of all mutable scene state
pub struct SceneStore {
    /// The sun, absent until its model resolves
    pub sun: Option<CelestialBody>,

    /// The rocket, absent until its model resolves
    pub rocket: Option<Vehicle>,

    /// Thruster glow, created together with the rocket
    pub thruster: Option<ThrusterLight>,

    /// Flame billboard, created together with the rocket
    pub flame: Option<FlameSprite>,

    /// Background stars, populated at bootstrap
    pub stars: Vec<StarPoint>,

    /// Dust cloud, populated at bootstrap
    pub dust: Option<DustCloud>,

    /// Background texture, absent until resolved
    pub background: Option<TextureData>,

    /// Scene camera
    pub camera: Camera,

    /// Scene lighting
    pub lighting: LightingEnvironment,

    /// Current viewport size
    pub viewport: Viewport,
}

impl SceneStore {
    /// Create an empty store with camera, lighting, and viewport configured.
    ///
    /// Populations are added separately by [`SceneStore::populate`] so tests
    /// can control the random source.
    pub fn new(config: &SceneConfig) -> Self {
        let viewport = Viewport::new(config.viewport.width, config.viewport.height);
        let camera = Camera::perspective(
            Vec3::new(0.0, 0.0, config.camera.distance),
            config.camera.fov_degrees,
            viewport.aspect(),
            config.camera.near,
            config.camera.far,
        );
        Self {
            sun: None,
            rocket: None,
            thruster: None,
            flame: None,
            stars: Vec::new(),
            dust: None,
            background: None,
            camera,
            lighting: LightingEnvironment::deep_space(),
            viewport,
        }
    }

    /// Build the static and random populations: stars and dust.
    ///
    /// Each star gets a uniformly random position inside the configured cubic
    /// bound and an independent pulse speed from the configured band; both
    /// are frozen for the star's lifetime. Dust points only get positions.
    pub fn populate<R: Rng>(&mut self, config: &SceneConfig, rng: &mut R) {
        let half = config.starfield.spread / 2.0;
        self.stars = (0..config.starfield.count)
            .map(|_| StarPoint {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                scale: 1.0,
                pulse_speed: rng
                    .gen_range(config.starfield.pulse_speed_min..config.starfield.pulse_speed_max),
            })
            .collect();

        let half = config.dust.spread / 2.0;
        let positions = (0..config.dust.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        self.dust = Some(DustCloud {
            positions,
            point_size: config.dust.point_size,
            opacity: config.dust.opacity,
        });

        log::info!(
            "Scene populated: {} stars, {} dust points",
            self.stars.len(),
            config.dust.count
        );
    }

    /// Attach the resolved sun model and add its glow light.
    pub fn attach_sun(&mut self, mesh: Mesh, config: &SceneConfig) {
        let emissive = EmissiveParams {
            color: Vec3::from(config.sun.emissive_color),
            intensity: config.sun.emissive_intensity,
        };
        let body = CelestialBody::new(mesh, config.sun.scale, emissive);
        self.lighting.lights.push(Light::point(
            body.transform.position,
            Vec3::new(1.0, 1.0, 1.0),
            config.sun.light_intensity,
            config.sun.light_range,
        ));
        self.sun = Some(body);
        log::info!("Sun attached to scene");
    }

    /// Attach the resolved rocket model together with its thruster light and
    /// flame sprite. If the flame texture resolved first it is passed in via
    /// `parked_texture`.
    pub fn attach_rocket(
        &mut self,
        mesh: Mesh,
        config: &SceneConfig,
        parked_texture: Option<TextureData>,
    ) {
        self.rocket = Some(Vehicle::new(mesh, config.vehicle.scale));
        self.thruster = Some(ThrusterLight {
            color: Vec3::from(config.thruster.color),
            intensity: config.thruster.baseline,
            range: config.thruster.range,
            offset: Vec3::from(config.thruster.offset),
        });
        self.flame = Some(FlameSprite {
            scale: Vec2::new(config.flame.scale_min, config.flame.scale_min * config.flame.height_ratio),
            opacity: config.flame.base_opacity,
            tint: Vec3::from(config.flame.tint),
            offset: Vec3::from(config.flame.offset),
            texture: parked_texture,
        });
        log::info!("Rocket attached to scene with thruster and flame");
    }

    /// Attach the flame texture to the sprite. When the sprite does not
    /// exist yet the texture is handed back so the caller can park it.
    pub fn attach_flame_texture(&mut self, texture: TextureData) -> Option<TextureData> {
        match self.flame.as_mut() {
            Some(flame) => {
                flame.texture = Some(texture);
                log::info!("Flame texture attached");
                None
            }
            None => Some(texture),
        }
    }

    /// Apply a viewport resize: update the stored size and the camera's
    /// projection parameters. No other side effects.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect_ratio(self.viewport.aspect());
    }
}
