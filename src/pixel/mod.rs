mod rgba;
mod alpha_blend;

pub use rgba::*;
pub use alpha_blend::*;
