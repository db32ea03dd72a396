#![doc(html_no_source)]

mod lumen;
pub use lumen::Lumen;

// Reexport all crates
pub use lumen_camera;
pub use lumen_ray_tracer;
pub use lumen_texture;
pub use puffin;
