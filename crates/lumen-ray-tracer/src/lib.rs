//! CPU ray tracer casting one primary ray per pixel and lighting hits with directional, point and
//! spot lights under hard shadows.

mod color;
pub use color::Color;
pub mod config;
pub use config::{Compositing, RenderConfig, RenderConfigBuilder};
pub mod error;
pub use error::{ConfigError, LightError};
mod frame;
pub use frame::{render_frame, FrameSnapshot};
mod frame_buffer;
pub use frame_buffer::FrameBuffer;
pub mod intersection;
pub use intersection::{CollisionLayers, Intersectable};
pub mod light_sources;
pub use light_sources::{DirectionalLight, Light, LightSource, PointLight, SpotLight};
mod material;
pub use material::Material;
pub mod ray;
pub use ray::{Hit, Ray, SHADOW_RAY_EPSILON};
pub mod ray_generator;
pub mod scene;
pub mod shading;
