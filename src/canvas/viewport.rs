use super::error::*;
use super::transform2d::*;

///
/// Maps between raster pixel coordinates and the mathematical coordinate range shown by
/// a graph
///
/// The drawable region is the raster size minus the margin on every side; the
/// mathematical range is stretched over that region, with `range_start` at its
/// lower-left corner and `range_end` at its upper-right (raster rows grow downwards, so
/// the y axis is inverted by the mapping).
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Total size of the raster in pixels
    pub size: (usize, usize),

    /// Blank border on each side of the drawable region, in pixels
    pub margin: (usize, usize),

    /// Mathematical coordinates of the lower-left corner of the drawable region
    pub range_start: (f32, f32),

    /// Mathematical coordinates of the upper-right corner of the drawable region
    pub range_end: (f32, f32),
}

impl Viewport {
    pub fn new(
        size: (usize, usize),
        margin: (usize, usize),
        range_start: (f32, f32),
        range_end: (f32, f32),
    ) -> Viewport {
        Viewport {
            size:        size,
            margin:      margin,
            range_start: range_start,
            range_end:   range_end,
        }
    }

    /// Width of the drawable region (the raster width minus both margins)
    #[inline]
    pub fn drawing_width(&self) -> f32 {
        self.size.0 as f32 - (self.margin.0 * 2) as f32
    }

    /// Height of the drawable region (the raster height minus both margins)
    #[inline]
    pub fn drawing_height(&self) -> f32 {
        self.size.1 as f32 - (self.margin.1 * 2) as f32
    }

    /// Signed length of the x range
    #[inline]
    pub fn x_span(&self) -> f32 {
        self.range_end.0 - self.range_start.0
    }

    /// Signed length of the y range
    #[inline]
    pub fn y_span(&self) -> f32 {
        self.range_end.1 - self.range_start.1
    }

    ///
    /// Checks that this viewport can map pixels to mathematical coordinates
    ///
    /// The mapping divides by the drawable size and multiplies by the range spans, so
    /// both must be non-zero (and the spans finite) for any draw call to make sense.
    ///
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.drawing_width() <= 0.0 || self.drawing_height() <= 0.0 {
            return Err(RenderError::DegenerateCanvas);
        }

        if !self.x_span().is_finite() || !self.y_span().is_finite() {
            return Err(RenderError::DegenerateCanvas);
        }

        if self.x_span() == 0.0 || self.y_span() == 0.0 {
            return Err(RenderError::DegenerateCanvas);
        }

        Ok(())
    }

    ///
    /// Converts a raster pixel position to mathematical coordinates
    ///
    /// Pixels inside the margin map to coordinates at or beyond the edge of the range;
    /// this is well defined and lets a draw call process every pixel of the raster.
    ///
    #[inline]
    pub fn to_math(&self, pixel: (i32, i32)) -> (f32, f32) {
        let x = (pixel.0 - self.margin.0 as i32) as f32 / self.drawing_width() * self.x_span()
            + self.range_start.0;
        let y = -((pixel.1 - self.margin.1 as i32) as f32 / self.drawing_height() * self.y_span())
            + self.range_end.1;

        (x, y)
    }

    ///
    /// Converts mathematical coordinates to a (fractional) raster pixel position
    ///
    #[inline]
    pub fn to_pixel(&self, math: (f32, f32)) -> (f32, f32) {
        let x = (math.0 - self.range_start.0) / self.x_span() * self.drawing_width()
            + self.margin.0 as f32;
        let y = -(math.1 - self.range_end.1) / self.y_span() * self.drawing_height()
            + self.margin.1 as f32;

        (x, y)
    }

    ///
    /// The size of one pixel in mathematical units
    ///
    /// The y component is negative: moving down a raster row moves down the
    /// mathematical y axis.
    ///
    #[inline]
    pub fn pixel_footprint(&self) -> (f32, f32) {
        let (x0, y0) = self.to_math((0, 0));
        let (x1, y1) = self.to_math((1, 1));

        (x1 - x0, y1 - y0)
    }

    ///
    /// Builds the affine transform mapping the mathematical range onto normalized device
    /// coordinates (-1 to 1 on each axis)
    ///
    /// This is the vertex-stage companion of `to_math`, used to position background
    /// geometry: it ignores the margin and only requires the range to be non-degenerate.
    ///
    pub fn to_ndc(&self) -> Result<Transform2D, RenderError> {
        let x_span = self.x_span();
        let y_span = self.y_span();

        if !x_span.is_finite() || !y_span.is_finite() || x_span == 0.0 || y_span == 0.0 {
            return Err(RenderError::DegenerateCanvas);
        }

        let center_x = (self.range_start.0 + self.range_end.0) * 0.5;
        let center_y = (self.range_start.1 + self.range_end.1) * 0.5;

        Ok(Transform2D::scale(2.0 / x_span, 2.0 / y_span)
            * Transform2D::translate(-center_x, -center_y))
    }

    ///
    /// Grows or shrinks the range around its centre (a zoom between draw calls)
    ///
    /// Updates that would make a range bound non-finite are ignored.
    ///
    pub fn scale_range(&mut self, scale: (f32, f32)) {
        let x_diff = self.x_span() * (scale.0 - 1.0);
        let y_diff = self.y_span() * (scale.1 - 1.0);

        let new_start = (
            self.range_start.0 - x_diff * 0.5,
            self.range_start.1 - y_diff * 0.5,
        );
        let new_end = (
            self.range_end.0 + x_diff * 0.5,
            self.range_end.1 + y_diff * 0.5,
        );

        if !new_start.0.is_finite()
            || !new_start.1.is_finite()
            || !new_end.0.is_finite()
            || !new_end.1.is_finite()
        {
            return;
        }

        self.range_start = new_start;
        self.range_end = new_end;
    }

    ///
    /// Shifts the range by an offset (a pan between draw calls)
    ///
    /// Updates that would make a range bound non-finite are ignored.
    ///
    pub fn offset_range(&mut self, offset: (f32, f32)) {
        let new_start = (self.range_start.0 + offset.0, self.range_start.1 + offset.1);
        let new_end = (self.range_end.0 + offset.0, self.range_end.1 + offset.1);

        if !new_start.0.is_finite()
            || !new_start.1.is_finite()
            || !new_end.0.is_finite()
            || !new_end.1.is_finite()
        {
            return;
        }

        self.range_start = new_start;
        self.range_end = new_end;
    }
}
