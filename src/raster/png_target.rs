use super::raster_target::*;

use std::io::{BufWriter, Write};

impl RasterTarget {
    ///
    /// Encodes this raster as an 8-bit RGBA PNG and writes it to a stream
    ///
    pub fn write_png<TStream>(&self, target: TStream) -> Result<(), png::EncodingError>
    where
        TStream: Write,
    {
        let mut encoder = png::Encoder::new(
            BufWriter::new(target),
            self.width() as u32,
            self.height() as u32,
        );

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba8())?;
        writer.finish()?;

        Ok(())
    }
}
