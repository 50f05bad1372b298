mod viewport;
mod transform2d;
mod implicit;
mod curve_style;
mod error;

pub use viewport::*;
pub use transform2d::*;
pub use implicit::*;
pub use curve_style::*;
pub use error::*;
