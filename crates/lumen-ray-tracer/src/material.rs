use std::sync::Arc;

use glam::Vec2;
use lumen_texture::Texture;

use crate::Color;

/// Surface appearance, either a flat color or a texture.
#[derive(Debug, Clone)]
pub struct Material {
    pub base_color: Color,
    pub texture: Option<Arc<Texture>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            texture: None,
        }
    }
}

impl Material {
    pub fn from_color(base_color: Color) -> Self {
        Self {
            base_color,
            texture: None,
        }
    }

    pub fn from_texture(texture: Arc<Texture>) -> Self {
        Self {
            base_color: Color::WHITE,
            texture: Some(texture),
        }
    }

    /// The texture wins over the flat color, unless the surface has no texture coordinates.
    pub fn surface_color(&self, tex_coord: Option<Vec2>) -> Color {
        match (&self.texture, tex_coord) {
            (Some(texture), Some(uv)) => Color::from(texture.sample(uv)),
            _ => self.base_color,
        }
    }
}
