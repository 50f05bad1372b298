use crate::canvas::*;

use itertools::iproduct;
use once_cell::sync::Lazy;
use smallvec::SmallVec;

/// Highest supported supersampling factor (a factor of k samples a (k+1)×(k+1) grid)
pub const MAX_SUPERSAMPLE: u32 = 7;

/// Unit sample grids for every supported supersampling factor: offsets within the
/// -0.5..0.5 square, scaled by the footprint of a draw call when a pattern is built
static UNIT_GRIDS: Lazy<Vec<Vec<(f32, f32)>>> = Lazy::new(|| {
    (0..=MAX_SUPERSAMPLE)
        .map(|k| {
            let unit = |step: u32| {
                if k == 0 {
                    0.0
                } else {
                    step as f32 / k as f32 - 0.5
                }
            };

            iproduct!(0..=k, 0..=k)
                .map(|(x_step, y_step)| (unit(x_step), unit(y_step)))
                .collect()
        })
        .collect()
});

///
/// The fixed grid of sample offsets used to estimate how much of a pixel is covered by
/// a curve
///
/// One pattern is built per draw call and reused for every pixel: (k+1)² offsets tiling
/// a square of side `thickness` pixels (expressed in mathematical units) centred on the
/// pixel's mathematical position. Thickness dilates the footprint, so a thicker stroke
/// samples a wider and proportionally coarser area.
///
#[derive(Clone, Debug)]
pub struct SamplePattern {
    /// Sample offsets from the pixel centre, in mathematical units
    offsets: SmallVec<[(f32, f32); 9]>,
}

impl SamplePattern {
    ///
    /// Creates the sample pattern for one curve draw call
    ///
    /// The supersampling factor is clamped to `MAX_SUPERSAMPLE`. A thickness of 0
    /// collapses every offset onto the pixel centre, which degenerates to a hard
    /// (unsmoothed) coverage step rather than an error.
    ///
    pub fn for_viewport(
        viewport: &Viewport,
        thickness: f32,
        supersample: u32,
    ) -> Result<SamplePattern, RenderError> {
        viewport.validate()?;

        let supersample = supersample.min(MAX_SUPERSAMPLE) as usize;
        let (pixel_w, pixel_h) = viewport.pixel_footprint();
        let (span_x, span_y) = (pixel_w * thickness, pixel_h * thickness);

        let offsets = UNIT_GRIDS[supersample]
            .iter()
            .map(|(unit_x, unit_y)| (unit_x * span_x, unit_y * span_y))
            .collect();

        Ok(SamplePattern { offsets: offsets })
    }

    /// Number of function samples taken per pixel
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.offsets.len()
    }

    ///
    /// Estimates the coverage of the pixel whose mathematical position is `center`
    ///
    /// Sums the sign of the function at every sample point and measures how unanimous
    /// the signs are. Full agreement means the whole footprint lies on one side of the
    /// curve and the coverage is 0; mixed signs mean the zero-set crosses the footprint
    /// and the coverage rises smoothly towards 1.
    ///
    pub fn coverage(&self, center: (f32, f32), function: &dyn ImplicitFunction) -> f32 {
        let mut sign_sum = 0i32;

        for (offset_x, offset_y) in self.offsets.iter() {
            sign_sum += sample_sign(function.evaluate(center.0 + offset_x, center.1 + offset_y));
        }

        let agreement = sign_sum.abs() as f32 / self.offsets.len() as f32;

        1.0 - smoothstep(agreement)
    }
}

/// Hermite interpolation of the 0-1 range (values outside are clamped)
#[inline]
fn smoothstep(value: f32) -> f32 {
    let value = value.clamp(0.0, 1.0);

    value * value * (3.0 - 2.0 * value)
}
