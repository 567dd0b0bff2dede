//! Host-side surfaces that charts are mounted into.

mod registry;
mod surface;

pub use registry::SurfaceRegistry;
pub use surface::{Surface, Viewport};
