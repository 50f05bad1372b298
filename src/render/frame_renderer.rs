use super::frame_size::*;
use super::renderer::*;

use crate::pixel::*;

///
/// Renders a whole frame by running a scanline renderer over every row of the raster
///
/// Rows are cut into chunks of `LINES_AT_ONCE` scanlines; each chunk is a disjoint slice
/// of the destination buffer, so with the `multithreading` feature the chunks are handed
/// to rayon and rendered in parallel without any locking. The result is identical
/// whatever the execution order.
///
pub struct CurveFrameRenderer<TLineRenderer>
where
    TLineRenderer: Renderer<Region = i32, Dest = [Rgba]>,
{
    line_renderer: TLineRenderer,
}

impl<TLineRenderer> CurveFrameRenderer<TLineRenderer>
where
    TLineRenderer: Renderer<Region = i32, Dest = [Rgba]>,
{
    ///
    /// Creates a frame renderer that fans a scanline renderer out over a raster
    ///
    pub fn new(line_renderer: TLineRenderer) -> Self {
        CurveFrameRenderer {
            line_renderer: line_renderer,
        }
    }
}

#[cfg(not(feature = "multithreading"))]
impl<TLineRenderer> Renderer for CurveFrameRenderer<TLineRenderer>
where
    TLineRenderer: Renderer<Region = i32, Dest = [Rgba]>,
{
    type Region = FrameSize;
    type Source = TLineRenderer::Source;
    type Dest   = [Rgba];

    fn render(&self, region: &FrameSize, source: &TLineRenderer::Source, dest: &mut [Rgba]) {
        const LINES_AT_ONCE: usize = 8;

        if region.width == 0 || region.height == 0 {
            return;
        }

        if dest.len() < region.width * region.height {
            panic!(
                "Cannot render: needed an output buffer large enough to fit {} lines but found {} lines",
                region.height,
                dest.len() / region.width
            );
        }

        let chunks = dest.chunks_mut(region.width * LINES_AT_ONCE);

        chunks.enumerate().for_each(|(chunk_idx, chunk)| {
            let start_y = chunk_idx * LINES_AT_ONCE;

            for (line_idx, line) in chunk.chunks_exact_mut(region.width).enumerate() {
                let y_pos = (start_y + line_idx) as i32;
                self.line_renderer.render(&y_pos, source, line);
            }
        });
    }
}

#[cfg(feature = "multithreading")]
impl<TLineRenderer> Renderer for CurveFrameRenderer<TLineRenderer>
where
    TLineRenderer: Renderer<Region = i32, Dest = [Rgba]>,
    TLineRenderer::Source: Sync,
{
    type Region = FrameSize;
    type Source = TLineRenderer::Source;
    type Dest   = [Rgba];

    fn render(&self, region: &FrameSize, source: &TLineRenderer::Source, dest: &mut [Rgba]) {
        const LINES_AT_ONCE: usize = 8;

        use rayon::prelude::*;

        if region.width == 0 || region.height == 0 {
            return;
        }

        if dest.len() < region.width * region.height {
            panic!(
                "Cannot render: needed an output buffer large enough to fit {} lines but found {} lines",
                region.height,
                dest.len() / region.width
            );
        }

        let chunks        = dest.par_chunks_mut(region.width * LINES_AT_ONCE);
        let line_renderer = &self.line_renderer;

        chunks.enumerate().for_each(|(chunk_idx, chunk)| {
            let start_y = chunk_idx * LINES_AT_ONCE;

            for (line_idx, line) in chunk.chunks_exact_mut(region.width).enumerate() {
                let y_pos = (start_y + line_idx) as i32;
                line_renderer.render(&y_pos, source, line);
            }
        });
    }
}
