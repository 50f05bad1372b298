use crate::pixel::*;

///
/// Style settings describing how the graph of one curve is drawn
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStyle {
    /// Colour composited wherever the curve has coverage
    pub color: Rgba,

    /// Stroke thickness in pixels (this is also the side of the supersampling footprint)
    pub thickness: f32,

    /// Supersampling factor: coverage is estimated from a (supersample+1)² grid of samples
    pub supersample: u32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        CurveStyle {
            color:       Rgba::black(),
            thickness:   Thickness::MEDIUM,
            supersample: 2,
        }
    }
}

impl CurveStyle {
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn supersample(mut self, supersample: u32) -> Self {
        self.supersample = supersample;
        self
    }
}

/// Named stroke thicknesses, in pixels
pub struct Thickness;
impl Thickness {
    pub const EXTRATHIN: f32 = 1.0;
    pub const THIN: f32 = 2.0;
    pub const MEDIUM: f32 = 3.0;
    pub const BOLD: f32 = 5.0;
    pub const EXTRABOLD: f32 = 8.0;
}
