use crate::{error::ConfigError, intersection::CollisionLayers, Color};

/// How the lit result is combined with a surface's base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compositing {
    /// `base + light`
    #[default]
    Additive,
    /// `base * light`
    Multiplicative,
}

impl Compositing {
    pub fn apply(&self, base: Color, light: Color) -> Color {
        match self {
            Self::Additive => base + light,
            Self::Multiplicative => base * light,
        }
    }
}

/// Validated settings for a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    resolution_multiplier: u32,
    ambient: Color,
    collision_layers: CollisionLayers,
    fallback_color: Color,
    compositing: Compositing,
    pub enabled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution_multiplier: 1,
            ambient: Color::BLACK,
            collision_layers: CollisionLayers::all(),
            fallback_color: Color::BLACK,
            compositing: Compositing::Additive,
            enabled: false,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Scales the output buffer along both axes.
    pub fn resolution_multiplier(&self) -> u32 {
        self.resolution_multiplier
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn collision_layers(&self) -> CollisionLayers {
        self.collision_layers
    }

    pub fn fallback_color(&self) -> Color {
        self.fallback_color
    }

    pub fn compositing(&self) -> Compositing {
        self.compositing
    }

    /// Flips whether the pass runs, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn resolution_multiplier(mut self, resolution_multiplier: u32) -> Self {
        self.config.resolution_multiplier = resolution_multiplier;
        self
    }

    pub fn ambient(mut self, ambient: Color) -> Self {
        self.config.ambient = ambient;
        self
    }

    pub fn collision_layers(mut self, collision_layers: CollisionLayers) -> Self {
        self.config.collision_layers = collision_layers;
        self
    }

    pub fn fallback_color(mut self, fallback_color: Color) -> Self {
        self.config.fallback_color = fallback_color;
        self
    }

    pub fn compositing(mut self, compositing: Compositing) -> Self {
        self.config.compositing = compositing;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let config = self.config;

        if config.resolution_multiplier < 1 {
            return Err(ConfigError::InvalidResolutionMultiplier(
                config.resolution_multiplier,
            ));
        }
        if !config.ambient.is_finite() || !config.ambient.is_non_negative() {
            return Err(ConfigError::InvalidAmbient(config.ambient.to_array()));
        }
        if !config.fallback_color.is_finite() || !config.fallback_color.is_non_negative() {
            return Err(ConfigError::InvalidFallbackColor(
                config.fallback_color.to_array(),
            ));
        }

        Ok(config)
    }
}
