use wide::*;

///
/// A colour made up of red, green, blue and alpha components, in that order
///
/// Components are f32 values with a nominal range of 0-1, stored as a single SIMD
/// value. The alpha is not pre-multiplied into the colour components: compositing
/// divides by the blended alpha instead (see the `AlphaBlend` trait).
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba(pub(crate) f32x4);

impl Default for Rgba {
    #[inline]
    fn default() -> Self {
        Rgba(f32x4::splat(0.0))
    }
}

impl Rgba {
    #[inline]
    pub fn with_components(components: [f32; 4]) -> Rgba {
        Rgba(f32x4::new(components))
    }

    #[inline]
    pub fn to_components(&self) -> [f32; 4] {
        self.0.to_array()
    }

    #[inline]
    pub fn transparent() -> Rgba {
        Rgba(f32x4::splat(0.0))
    }

    #[inline]
    pub fn black() -> Rgba {
        Rgba(f32x4::new([0.0, 0.0, 0.0, 1.0]))
    }

    #[inline]
    pub fn white() -> Rgba {
        Rgba(f32x4::new([1.0, 1.0, 1.0, 1.0]))
    }

    /// An opaque grey of the specified brightness
    #[inline]
    pub fn grey(level: f32) -> Rgba {
        Rgba(f32x4::new([level, level, level, 1.0]))
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0.as_array_ref()[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0.as_array_ref()[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0.as_array_ref()[2]
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.0.as_array_ref()[3]
    }

    ///
    /// Creates a colour from 8-bit RGBA components
    ///
    #[inline]
    pub fn from_rgba8(components: [u8; 4]) -> Rgba {
        let pixel = f32x4::new([
            components[0] as f32,
            components[1] as f32,
            components[2] as f32,
            components[3] as f32,
        ]);

        Rgba(pixel / f32x4::splat(255.0))
    }

    ///
    /// Converts this colour to 8-bit RGBA components, clamping each channel to the 0-1 range
    ///
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let clamped = self.0.min(f32x4::ONE).max(f32x4::ZERO) * f32x4::splat(255.0);

        let [r, g, b, a] = clamped.to_array();
        [
            (r + 0.5) as u8,
            (g + 0.5) as u8,
            (b + 0.5) as u8,
            (a + 0.5) as u8,
        ]
    }
}
