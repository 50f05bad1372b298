use super::curve_renderer::*;
use super::frame_renderer::*;
use super::frame_size::*;
use super::renderer::*;
use super::sample_pattern::*;

use crate::canvas::*;
use crate::raster::*;

///
/// Draws one implicit curve into a raster target
///
/// This is a single draw call: every pixel of the target (margin pixels included) gets a
/// coverage estimate and a source-over composite of the curve colour. The viewport
/// describes how the target's pixels map to mathematical coordinates and is expected to
/// have the same size as the target.
///
/// Successive draw calls into the same target composite in call order (the `&mut` borrow
/// serialises them); clear the target first when a fresh frame is wanted.
///
pub fn draw_curve(
    target: &mut RasterTarget,
    viewport: &Viewport,
    style: &CurveStyle,
    function: &dyn ImplicitFunction,
) -> Result<(), RenderError> {
    let pattern = SamplePattern::for_viewport(viewport, style.thickness, style.supersample)?;

    log::debug!(
        "draw_curve: {}x{} raster, range {:?}..{:?}, {} samples/pixel",
        target.width(),
        target.height(),
        viewport.range_start,
        viewport.range_end,
        pattern.num_samples()
    );

    let frame_size = FrameSize {
        width:  target.width(),
        height: target.height(),
    };

    let line_renderer  = CurveScanlineRenderer::new(viewport, style.color, &pattern);
    let frame_renderer = CurveFrameRenderer::new(line_renderer);

    frame_renderer.render(&frame_size, function, target.pixels_mut());

    Ok(())
}
