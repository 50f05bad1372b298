use super::rgba::*;

use wide::*;

///
/// Trait implemented by colour types that can be alpha-composited onto a raster target
///
/// Colours here are straight (not pre-multiplied): `source_over` blends the colour
/// components weighted by alpha and divides by the alpha of the result.
///
pub trait AlphaBlend: Sized {
    /// Clamps every component into the 0-1 range
    fn clamp_unit(self) -> Self;

    /// Scales the alpha channel, leaving the colour components untouched
    fn multiply_alpha(self, factor: f32) -> Self;

    /// Standard source-over compositing of `self` on top of `dest`
    fn source_over(self, dest: Self) -> Self;

    ///
    /// Source-over compositing with the source alpha modulated by an antialiasing
    /// coverage value (0 leaves `dest` unchanged, 1 is a plain source-over)
    ///
    #[inline]
    fn source_over_coverage(self, dest: Self, coverage: f32) -> Self {
        self.multiply_alpha(coverage).source_over(dest)
    }
}

impl AlphaBlend for Rgba {
    #[inline]
    fn clamp_unit(self) -> Self {
        Rgba(self.0.min(f32x4::ONE).max(f32x4::ZERO))
    }

    #[inline]
    fn multiply_alpha(self, factor: f32) -> Self {
        let [r, g, b, a] = self.to_components();
        Rgba::with_components([r, g, b, a * factor])
    }

    fn source_over(self, dest: Self) -> Self {
        let src = self.clamp_unit();
        let dst = dest.clamp_unit();

        let src_alpha = src.alpha();
        let dst_alpha = dst.alpha();
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

        // A fully transparent result has no meaningful colour components
        if out_alpha <= 0.0 {
            return Rgba::transparent();
        }

        let blended = (src.0 * f32x4::splat(src_alpha)
            + dst.0 * f32x4::splat(dst_alpha * (1.0 - src_alpha)))
            / f32x4::splat(out_alpha);

        let [r, g, b, _] = blended.to_array();
        Rgba::with_components([r, g, b, out_alpha])
    }
}
