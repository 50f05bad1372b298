///
/// A renderer converts from a set of source instructions to a set of destination values
///
/// For curve rendering the source is the implicit function being drawn: the scanline
/// renderer fills a single row of pixels from it, and the frame renderer fans rows out
/// across the whole raster.
///
pub trait Renderer: Send + Sync {
    /// The region is used to specify what part of the target is being rendered
    type Region: ?Sized;

    /// The source is the source instructions for the rendering
    type Source: ?Sized;

    /// The dest is the target buffer type for the rendering
    type Dest: ?Sized;

    ///
    /// Renders a set of instructions to a destination
    ///
    fn render(&self, region: &Self::Region, source: &Self::Source, dest: &mut Self::Dest);
}
