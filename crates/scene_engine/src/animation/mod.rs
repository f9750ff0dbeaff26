//! Per-frame animation
//!
//! [`AnimationDriver::advance`] moves every visual entity one frame forward
//! from the current wall-clock time plus fresh randomness. Two time bases
//! deliberately coexist: orbit, thruster pulse, and star twinkle are pure
//! functions of elapsed seconds (frame-rate independent), while the sun and
//! rocket self-rotations accumulate a fixed increment per call (frame-rate
//! dependent).
//!
//! Every rule skips entities that have not resolved yet; a frame never fails
//! because an asset is still in flight.

use crate::config::SceneConfig;
use crate::foundation::math::Vec2;
use crate::scene::SceneStore;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Advances all scene state for one frame
pub struct AnimationDriver {
    config: SceneConfig,
    rng: ThreadRng,
}

impl AnimationDriver {
    /// Create a driver with the given scene constants
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Advance every entity one frame, where `t` is elapsed seconds.
    ///
    /// Bounded, non-blocking work; absent entities are skipped. The dust
    /// cloud is static and has no rule.
    pub fn advance(&mut self, scene: &mut SceneStore, t: f32) {
        self.spin_sun(scene);
        self.drive_orbit(scene, t);
        self.pulse_thruster(scene, t);
        self.flicker_flame(scene);
        self.twinkle_stars(scene, t);
    }

    /// Sun self-rotation: fixed yaw increment per frame.
    fn spin_sun(&self, scene: &mut SceneStore) {
        if let Some(sun) = scene.sun.as_mut() {
            sun.spin_angle += self.config.spin.sun_increment;
            sun.transform.set_yaw(sun.spin_angle);
        }
    }

    /// Rocket orbit and self-rotation.
    ///
    /// The orbital angle is `t * angular_speed`, so the position is a pure
    /// function of time: a rocket that resolves mid-run appears on the orbit
    /// circle for the current timestamp, never at the origin. The spin, by
    /// contrast, accumulates per frame.
    fn drive_orbit(&self, scene: &mut SceneStore, t: f32) {
        if let Some(rocket) = scene.rocket.as_mut() {
            let angle = t * self.config.orbit.angular_speed;
            rocket.transform.position.x = self.config.orbit.radius * angle.cos();
            rocket.transform.position.y = self.config.orbit.radius * angle.sin();
            rocket.spin_angle += self.config.spin.rocket_increment;
            rocket.transform.set_yaw(rocket.spin_angle);
        }
    }

    /// Thruster glow: sinusoidal intensity around the baseline, continuous
    /// in `t`.
    fn pulse_thruster(&self, scene: &mut SceneStore, t: f32) {
        if let Some(thruster) = scene.thruster.as_mut() {
            let thr = &self.config.thruster;
            thruster.intensity = thr.baseline + thr.amplitude * (t * thr.frequency).sin();
        }
    }

    /// Flame flicker: two fresh uniform draws per frame for scale and
    /// opacity, height locked to a multiple of the width.
    fn flicker_flame(&mut self, scene: &mut SceneStore) {
        if let Some(flame) = scene.flame.as_mut() {
            let cfg = &self.config.flame;
            let width = self.rng.gen_range(cfg.scale_min..cfg.scale_max);
            flame.scale = Vec2::new(width, width * cfg.height_ratio);
            flame.opacity = self.rng.gen_range(cfg.opacity_min..cfg.opacity_max);
        }
    }

    /// Star twinkle: each star scales by `1 + amplitude * sin(t * pulse)`,
    /// with the pulse speed frozen per star at creation.
    fn twinkle_stars(&self, scene: &mut SceneStore, t: f32) {
        let amplitude = self.config.starfield.twinkle_amplitude;
        for star in &mut scene.stars {
            star.scale = 1.0 + amplitude * (t * star.pulse_speed).sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::Mesh;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_scene(config: &SceneConfig) -> SceneStore {
        SceneStore::new(config)
    }

    fn scene_with_rocket(config: &SceneConfig) -> SceneStore {
        let mut scene = SceneStore::new(config);
        scene.attach_rocket(Mesh::new(Vec::new(), vec![0, 0, 0]), config, None);
        scene
    }

    #[test]
    fn absent_entities_are_skipped_without_panic() {
        let config = SceneConfig::default();
        let mut scene = empty_scene(&config);
        let mut driver = AnimationDriver::new(config.clone());
        for frame in 0..100 {
            driver.advance(&mut scene, frame as f32 * 0.016);
        }
        assert!(scene.sun.is_none());
        assert!(scene.rocket.is_none());
        assert!(scene.thruster.is_none());
        assert!(scene.flame.is_none());
    }

    #[test]
    fn rocket_stays_on_orbit_circle_for_all_times() {
        let config = SceneConfig::default();
        let mut scene = scene_with_rocket(&config);
        let mut driver = AnimationDriver::new(config.clone());
        let r2 = config.orbit.radius * config.orbit.radius;
        for i in 0..1000 {
            let t = i as f32 * 0.37;
            driver.advance(&mut scene, t);
            let pos = scene.rocket.as_ref().unwrap().transform.position;
            assert_relative_eq!(pos.x * pos.x + pos.y * pos.y, r2, epsilon = 1e-2);
            assert_relative_eq!(pos.z, 0.0);
        }
    }

    #[test]
    fn orbit_phase_is_a_function_of_time_not_frames() {
        let config = SceneConfig::default();
        let mut driver = AnimationDriver::new(config.clone());

        let mut a = scene_with_rocket(&config);
        driver.advance(&mut a, 10.0);

        // Same timestamp reached after many more frames: same position.
        let mut b = scene_with_rocket(&config);
        for i in 0..100 {
            driver.advance(&mut b, i as f32 * 0.1);
        }
        driver.advance(&mut b, 10.0);

        let pa = a.rocket.as_ref().unwrap().transform.position;
        let pb = b.rocket.as_ref().unwrap().transform.position;
        assert_relative_eq!(pa.x, pb.x, epsilon = 1e-4);
        assert_relative_eq!(pa.y, pb.y, epsilon = 1e-4);
    }

    #[test]
    fn spin_accumulates_per_frame_regardless_of_time() {
        let config = SceneConfig::default();
        let mut scene = empty_scene(&config);
        scene.attach_sun(Mesh::new(Vec::new(), vec![0, 0, 0]), &config);
        let mut driver = AnimationDriver::new(config.clone());

        // Same timestamp on every call: the spin still advances.
        for _ in 0..50 {
            driver.advance(&mut scene, 1.0);
        }
        let spin = scene.sun.as_ref().unwrap().spin_angle;
        assert_relative_eq!(spin, 50.0 * config.spin.sun_increment, epsilon = 1e-6);
    }

    #[test]
    fn thruster_intensity_stays_within_band() {
        let config = SceneConfig::default();
        let mut scene = scene_with_rocket(&config);
        let mut driver = AnimationDriver::new(config.clone());
        let lo = config.thruster.baseline - config.thruster.amplitude;
        let hi = config.thruster.baseline + config.thruster.amplitude;
        for i in 0..2000 {
            driver.advance(&mut scene, i as f32 * 0.013);
            let intensity = scene.thruster.as_ref().unwrap().intensity;
            assert!(intensity >= lo - 1e-6 && intensity <= hi + 1e-6);
        }
    }

    #[test]
    fn flame_flicker_respects_bands_and_height_ratio() {
        let config = SceneConfig::default();
        let mut scene = scene_with_rocket(&config);
        let mut driver = AnimationDriver::new(config.clone());
        for i in 0..500 {
            driver.advance(&mut scene, i as f32 * 0.016);
            let flame = scene.flame.as_ref().unwrap();
            assert!(flame.scale.x >= config.flame.scale_min);
            assert!(flame.scale.x < config.flame.scale_max);
            assert_relative_eq!(
                flame.scale.y,
                flame.scale.x * config.flame.height_ratio,
                epsilon = 1e-6
            );
            assert!(flame.opacity >= config.flame.opacity_min);
            assert!(flame.opacity < config.flame.opacity_max);
        }
    }

    #[test]
    fn star_pulse_speeds_never_change_after_creation() {
        let config = SceneConfig::default();
        let mut scene = empty_scene(&config);
        scene.populate(&config, &mut StdRng::seed_from_u64(11));
        let before: Vec<f32> = scene.stars.iter().map(|s| s.pulse_speed).collect();

        let mut driver = AnimationDriver::new(config.clone());
        for i in 0..200 {
            driver.advance(&mut scene, i as f32 * 0.016);
        }
        let after: Vec<f32> = scene.stars.iter().map(|s| s.pulse_speed).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn stars_twinkle_within_amplitude_and_out_of_phase() {
        let config = SceneConfig::default();
        let mut scene = empty_scene(&config);
        scene.populate(&config, &mut StdRng::seed_from_u64(19));
        let mut driver = AnimationDriver::new(config.clone());

        driver.advance(&mut scene, 1.7);
        let amplitude = config.starfield.twinkle_amplitude;
        let mut distinct = std::collections::HashSet::new();
        for star in &scene.stars {
            assert!(star.scale >= 1.0 - amplitude - 1e-6);
            assert!(star.scale <= 1.0 + amplitude + 1e-6);
            distinct.insert(star.scale.to_bits());
        }
        // Independent pulse speeds keep the stars out of phase.
        assert!(distinct.len() > scene.stars.len() / 2);
    }

    #[test]
    fn dust_cloud_is_never_touched() {
        let config = SceneConfig::default();
        let mut scene = empty_scene(&config);
        scene.populate(&config, &mut StdRng::seed_from_u64(23));
        let before: Vec<Vec3> = scene.dust.as_ref().unwrap().positions.clone();

        let mut driver = AnimationDriver::new(config.clone());
        for i in 0..100 {
            driver.advance(&mut scene, i as f32 * 0.02);
        }
        assert_eq!(scene.dust.as_ref().unwrap().positions, before);
    }
}
