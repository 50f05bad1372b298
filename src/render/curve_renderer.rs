use super::renderer::*;
use super::sample_pattern::*;

use crate::canvas::*;
use crate::pixel::*;

///
/// Renders one scanline of an implicit curve
///
/// Every pixel of the scanline gets a coverage estimate from the sample pattern, and the
/// curve colour is composited over the existing raster contents with its alpha modulated
/// by that coverage. Pixels are independent of each other, so scanlines can be rendered
/// in any order.
///
pub struct CurveScanlineRenderer<'a> {
    viewport: &'a Viewport,
    color:    Rgba,
    pattern:  &'a SamplePattern,
}

impl<'a> CurveScanlineRenderer<'a> {
    ///
    /// Creates a scanline renderer for one curve draw call
    ///
    /// The viewport is expected to have been validated by the caller (the mapping
    /// divides by its drawable size and range spans).
    ///
    pub fn new(viewport: &'a Viewport, color: Rgba, pattern: &'a SamplePattern) -> Self {
        CurveScanlineRenderer {
            viewport: viewport,
            color:    color,
            pattern:  pattern,
        }
    }
}

impl<'a> Renderer for CurveScanlineRenderer<'a> {
    /// The y position of the scanline, in raster coordinates
    type Region = i32;
    type Source = dyn ImplicitFunction + 'a;
    type Dest   = [Rgba];

    fn render(&self, y_pos: &i32, function: &dyn ImplicitFunction, dest: &mut [Rgba]) {
        for (x_pos, pixel) in dest.iter_mut().enumerate() {
            let center   = self.viewport.to_math((x_pos as i32, *y_pos));
            let coverage = self.pattern.coverage(center, function);

            *pixel = self.color.source_over_coverage(*pixel, coverage);
        }
    }
}
