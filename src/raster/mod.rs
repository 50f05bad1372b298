mod raster_target;
#[cfg(feature = "render_png")]
mod png_target;

pub use raster_target::*;
