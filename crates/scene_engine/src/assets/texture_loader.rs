//! Texture decoding
//!
//! Decodes image files into tightly packed RGBA8 buffers ready for a
//! rendering backend to upload.

use crate::assets::AssetError;
use std::path::Path;

/// Decoded RGBA8 texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl TextureData {
    /// Decode a texture from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        log::debug!("Loading texture from {:?}", path);
        let img = image::open(path)
            .map_err(|e| AssetError::Decode(format!("{}: {}", path.display(), e)))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Loaded texture {:?}: {}x{}", path, width, height);
        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Decode a texture from an in-memory encoded image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::Decode(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Build a solid-color texture
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = (width * height) as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&color);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Size of the pixel buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
