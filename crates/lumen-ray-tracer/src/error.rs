use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LightError {
    #[error("light intensity must be finite and non-negative, got {0}")]
    InvalidIntensity(f32),
    #[error("light color components must be finite and non-negative, got {0:?}")]
    InvalidColor([f32; 3]),
    #[error("light range must be finite and greater than zero, got {0}")]
    InvalidRange(f32),
    #[error("light position must be finite, got {0:?}")]
    InvalidPosition([f32; 3]),
    #[error("light direction must be finite and non-zero")]
    InvalidDirection,
    #[error("spot angle must lie in [0, 180) degrees, got {0}")]
    InvalidSpotAngle(f32),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("resolution multiplier must be at least 1, got {0}")]
    InvalidResolutionMultiplier(u32),
    #[error("screen resolution must be non-zero, got {0}x{1}")]
    InvalidResolution(u32, u32),
    #[error("camera projection needs a fov in (0, 180) degrees and 0 < near < far, got fov {fov}, near {near}, far {far}")]
    InvalidProjection { fov: f32, near: f32, far: f32 },
    #[error("{width}x{height} screen scaled by {multiplier} does not fit in a frame buffer")]
    ResolutionOverflow {
        width: u32,
        height: u32,
        multiplier: u32,
    },
    #[error("ambient light components must be finite and non-negative, got {0:?}")]
    InvalidAmbient([f32; 3]),
    #[error("fallback color components must be finite and non-negative, got {0:?}")]
    InvalidFallbackColor([f32; 3]),
    #[error("light {index} is malformed: {source}")]
    InvalidLight {
        index: usize,
        #[source]
        source: LightError,
    },
}
