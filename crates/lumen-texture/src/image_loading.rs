use std::path::Path;

use anyhow::{Context, Result};

use crate::{Texture, TextureCreateDesc, TextureFormat};

impl Texture {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("Failed to decode texture {}.", path.display()))?;

        let texture = Self::from_image(Some(path.display().to_string()), image);
        log::info!(
            "Loaded texture {} ({}x{}).",
            texture.name(),
            texture.width(),
            texture.height()
        );
        Ok(texture)
    }

    /// Converts any decoded image to an 8-bit texture, keeping alpha only when the source has it.
    pub fn from_image(name: Option<String>, image: image::DynamicImage) -> Self {
        if image.color().has_alpha() {
            let image = image.into_rgba8();
            Texture::new(TextureCreateDesc {
                name,
                width: image.width(),
                height: image.height(),
                format: TextureFormat::Rgba8Unorm,
                data: image.into_raw().into_boxed_slice(),
            })
        } else {
            let image = image.into_rgb8();
            Texture::new(TextureCreateDesc {
                name,
                width: image.width(),
                height: image.height(),
                format: TextureFormat::Rgb8Unorm,
                data: image.into_raw().into_boxed_slice(),
            })
        }
    }
}
