//! Centre logo handling. Whatever the photo picker hands over is stored as a
//! PNG no larger than [`MAX_LOGO_EDGE`] on either side.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};

/// Longest edge, in pixels, of a stored logo.
pub const MAX_LOGO_EDGE: u32 = 512;

/// Decodes `bytes` in any format `image` recognises and re-encodes them as
/// PNG, downscaled to fit [`MAX_LOGO_EDGE`] with the aspect ratio kept.
pub fn normalize_logo(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).context("unsupported or corrupt logo image")?;
    encode_png(&fit_logo(img))
}

pub fn decode_logo(png_bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory_with_format(png_bytes, ImageFormat::Png)
        .context("stored logo is not a valid PNG")
}

fn fit_logo(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= MAX_LOGO_EDGE && height <= MAX_LOGO_EDGE {
        img
    } else {
        img.thumbnail(MAX_LOGO_EDGE, MAX_LOGO_EDGE)
    }
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("failed to encode logo as PNG")?;
    Ok(buffer)
}
