//! Asset resolution
//!
//! External model and texture handles resolve asynchronously into scene
//! entities. Each request is fire-and-forget: a background thread loads and
//! decodes the file, and the result comes home over a channel that is only
//! drained on the frame-loop thread, so every scene mutation stays on one
//! logical thread. A failed load is logged with the slot that failed and
//! swallowed; the entity simply never appears. No retries, no cancellation.

pub mod model_loader;
pub mod texture_loader;

pub use texture_loader::TextureData;

use crate::config::SceneConfig;
use crate::render::Mesh;
use crate::scene::SceneStore;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Model text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The scene slot an asset resolves into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    /// Scene background texture
    Background,
    /// Sun model
    SunModel,
    /// Rocket model
    RocketModel,
    /// Flame sprite texture
    FlameTexture,
}

impl AssetSlot {
    fn is_model(self) -> bool {
        matches!(self, Self::SunModel | Self::RocketModel)
    }
}

impl fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Background => "background texture",
            Self::SunModel => "sun model",
            Self::RocketModel => "rocket model",
            Self::FlameTexture => "flame texture",
        };
        f.write_str(name)
    }
}

/// A successfully loaded asset payload
#[derive(Debug, Clone)]
pub enum LoadedAsset {
    /// Decoded model geometry
    Model(Mesh),
    /// Decoded texture
    Texture(TextureData),
}

struct Resolution {
    slot: AssetSlot,
    result: Result<LoadedAsset, AssetError>,
}

/// Resolves asset requests in the background and attaches the results to the
/// scene from the frame-loop thread.
pub struct AssetResolver {
    tx: Sender<Resolution>,
    rx: Receiver<Resolution>,
    /// Flame texture that resolved before the rocket model did
    parked_flame_texture: Option<TextureData>,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetResolver {
    /// Create a resolver with no requests in flight
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            parked_flame_texture: None,
        }
    }

    /// Kick off a background load for `slot` from `path`. Non-blocking.
    pub fn request(&self, slot: AssetSlot, path: impl Into<PathBuf>) {
        let path = path.into();
        let tx = self.tx.clone();
        log::debug!("Requesting {} from {:?}", slot, path);
        thread::spawn(move || {
            let result = load(slot, &path);
            // A closed receiver means the loop already shut down.
            let _ = tx.send(Resolution { slot, result });
        });
    }

    /// Drain completed loads and attach them to the scene.
    ///
    /// Called once per frame by the run loop; this is the only place resolved
    /// assets touch scene state.
    pub fn pump(&mut self, scene: &mut SceneStore, config: &SceneConfig) {
        while let Ok(resolution) = self.rx.try_recv() {
            match resolution.result {
                Ok(asset) => self.apply(scene, resolution.slot, asset, config),
                Err(e) => log::error!("Failed to load {}: {}", resolution.slot, e),
            }
        }
    }

    /// Attach one resolved asset to the scene.
    ///
    /// Public so hosts that load assets through their own machinery can feed
    /// results in directly.
    pub fn apply(
        &mut self,
        scene: &mut SceneStore,
        slot: AssetSlot,
        asset: LoadedAsset,
        config: &SceneConfig,
    ) {
        match (slot, asset) {
            (AssetSlot::Background, LoadedAsset::Texture(texture)) => {
                scene.background = Some(texture);
                log::info!("Background texture attached");
            }
            (AssetSlot::SunModel, LoadedAsset::Model(mesh)) => {
                scene.attach_sun(mesh, config);
            }
            (AssetSlot::RocketModel, LoadedAsset::Model(mesh)) => {
                let parked = self.parked_flame_texture.take();
                scene.attach_rocket(mesh, config, parked);
            }
            (AssetSlot::FlameTexture, LoadedAsset::Texture(texture)) => {
                // Rocket may not have resolved yet; park the texture until it does.
                self.parked_flame_texture = scene.attach_flame_texture(texture);
            }
            (slot, _) => {
                log::error!("Resolved payload does not match slot {}", slot);
            }
        }
    }
}

fn load(slot: AssetSlot, path: &Path) -> Result<LoadedAsset, AssetError> {
    if slot.is_model() {
        model_loader::load_obj(path).map(LoadedAsset::Model)
    } else {
        TextureData::from_file(path).map(LoadedAsset::Texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use std::time::Duration;

    fn populated_scene(config: &SceneConfig) -> SceneStore {
        let mut scene = SceneStore::new(config);
        scene.populate(config, &mut StdRng::seed_from_u64(3));
        scene
    }

    #[test]
    fn failed_load_is_swallowed_and_scene_unchanged() {
        let config = SceneConfig::default();
        let mut scene = populated_scene(&config);
        let mut resolver = AssetResolver::new();

        resolver
            .tx
            .send(Resolution {
                slot: AssetSlot::SunModel,
                result: Err(AssetError::Parse("truncated".into())),
            })
            .unwrap();
        resolver.pump(&mut scene, &config);

        assert!(scene.sun.is_none());
        assert_eq!(scene.stars.len(), config.starfield.count);
    }

    #[test]
    fn background_thread_load_attaches_on_pump() {
        let config = SceneConfig::default();
        let mut scene = populated_scene(&config);
        let mut resolver = AssetResolver::new();

        let path = std::env::temp_dir().join(format!("rocket_{}.obj", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        }

        resolver.request(AssetSlot::RocketModel, &path);
        for _ in 0..500 {
            resolver.pump(&mut scene, &config);
            if scene.rocket.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        std::fs::remove_file(&path).ok();

        let rocket = scene.rocket.as_ref().expect("rocket resolved");
        assert_eq!(rocket.mesh.triangle_count(), 1);
        assert!(scene.thruster.is_some());
        assert!(scene.flame.is_some());
    }

    #[test]
    fn flame_texture_before_rocket_is_parked_then_attached() {
        let config = SceneConfig::default();
        let mut scene = populated_scene(&config);
        let mut resolver = AssetResolver::new();

        let texture = TextureData::solid_color(2, 2, [255, 100, 0, 255]);
        resolver.apply(
            &mut scene,
            AssetSlot::FlameTexture,
            LoadedAsset::Texture(texture),
            &config,
        );
        assert!(scene.flame.is_none());
        assert!(resolver.parked_flame_texture.is_some());

        resolver.apply(
            &mut scene,
            AssetSlot::RocketModel,
            LoadedAsset::Model(Mesh::new(Vec::new(), vec![0, 0, 0])),
            &config,
        );
        let flame = scene.flame.as_ref().unwrap();
        assert!(flame.texture.is_some());
        assert!(resolver.parked_flame_texture.is_none());
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let config = SceneConfig::default();
        let mut scene = populated_scene(&config);
        let mut resolver = AssetResolver::new();

        resolver.apply(
            &mut scene,
            AssetSlot::SunModel,
            LoadedAsset::Texture(TextureData::solid_color(1, 1, [0, 0, 0, 255])),
            &config,
        );
        assert!(scene.sun.is_none());
    }
}
