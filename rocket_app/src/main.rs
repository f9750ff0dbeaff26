//! Headless space-scene demo
//!
//! Bootstraps the scene, kicks off asset resolution, and runs the frame loop
//! against the headless present stage. Missing asset files are logged and the
//! corresponding entities simply never appear; the starfield animates either
//! way.
//!
//! Configuration is read from `rocket_app.toml` when present. The frame cap
//! defaults to 600 and can be overridden with the `ROCKET_APP_FRAMES`
//! environment variable.

use scene_engine::prelude::*;
use std::path::Path;

const CONFIG_PATH: &str = "rocket_app.toml";
const DEFAULT_FRAME_CAP: u64 = 600;

fn load_config() -> Result<SceneConfig, ConfigError> {
    if Path::new(CONFIG_PATH).exists() {
        log::info!("Loading config from {}", CONFIG_PATH);
        SceneConfig::from_toml_file(CONFIG_PATH)
    } else {
        Ok(SceneConfig::default())
    }
}

fn frame_cap() -> u64 {
    std::env::var("ROCKET_APP_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_FRAME_CAP)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();
    log::info!("Starting rocket scene demo");

    let config = load_config()?;
    let mut scene = SceneStore::new(&config);
    scene.populate(&config, &mut rand::thread_rng());

    let presenter = HeadlessPresenter::new(scene.viewport, 120);
    let rig = DampedOrbitRig::new(config.camera.distance);
    let mut engine =
        Engine::new(config, scene, Box::new(presenter), Box::new(rig)).with_frame_cap(frame_cap());

    engine
        .resolver()
        .request(AssetSlot::Background, "resources/textures/nebula.jpg");
    engine
        .resolver()
        .request(AssetSlot::SunModel, "resources/models/sun.obj");
    engine
        .resolver()
        .request(AssetSlot::RocketModel, "resources/models/rocket.obj");
    engine
        .resolver()
        .request(AssetSlot::FlameTexture, "resources/textures/flame.png");

    engine.run()?;

    log::info!("Demo finished after {} frames", engine.frames());
    Ok(())
}
