use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::ChartError;
use crate::render::RenderedImage;

// ---------------------------------------------------------------------------
// Exporter: rendered buffer → lossless PNG bytes
// ---------------------------------------------------------------------------

/// Encode a rendered figure as an in-memory PNG.
///
/// Lossless and deterministic: the same [`RenderedImage`] always yields
/// byte-identical output. The caller owns the buffer (e.g. to offer it for
/// download); nothing is written to disk here.
pub fn encode_png(image: &RenderedImage) -> Result<Vec<u8>, ChartError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        &image.pixels,
        image.width,
        image.height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}
