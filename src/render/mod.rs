mod renderer;
mod frame_size;
mod sample_pattern;
mod curve_renderer;
mod frame_renderer;
mod draw_curve;

pub use renderer::*;
pub use frame_size::*;
pub use sample_pattern::*;
pub use curve_renderer::*;
pub use frame_renderer::*;
pub use draw_curve::*;
