use crate::pixel::*;

///
/// A raster of RGBA cells that curve draw calls composite into
///
/// The target persists across draw calls: drawing several curves into the same target
/// composites them in call order. Within one draw call every cell is written at most
/// once, so the renderer can hand out disjoint row slices of the buffer to parallel
/// tasks without locking.
///
#[derive(Clone, Debug)]
pub struct RasterTarget {
    width:  usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RasterTarget {
    ///
    /// Creates a raster target filled with transparent pixels
    ///
    pub fn new(width: usize, height: usize) -> RasterTarget {
        RasterTarget {
            width:  width,
            height: height,
            pixels: vec![Rgba::transparent(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fills every cell with a single colour
    pub fn clear(&mut self, color: Rgba) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    /// The cell at a pixel position, or None for positions outside the raster
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<&Rgba> {
        if x >= self.width {
            return None;
        }

        self.pixels.get(y * self.width + x)
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    ///
    /// Flattens the raster into 8-bit RGBA bytes in row-major order (for handing to a
    /// display surface or an image encoder)
    ///
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);

        for pixel in self.pixels.iter() {
            bytes.extend_from_slice(&pixel.to_rgba8());
        }

        bytes
    }
}
