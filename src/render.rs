//! Turning a payload plus style into pixels.
//!
//! [`PlainRenderer`] draws square modules in the style's colors and stamps
//! the logo in the middle. Pixel, eye and corner shapes travel with the style
//! for richer renderers and are not drawn here.

use anyhow::{bail, Context, Result};
use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

use crate::{logo::decode_logo, models::QrCodeStyle};

/// Light modules kept around the symbol on every side.
pub const QUIET_ZONE: u32 = 4;

/// Largest requested edge, in pixels, a render accepts.
pub const MAX_RENDER_SIZE: u32 = 4096;

/// Share of the image edge the centre logo may cover.
pub const LOGO_FRACTION: f64 = 0.2;

pub trait QrRenderer {
    /// Renders `payload` at roughly `size` pixels square.
    fn render(&self, payload: &str, style: &QrCodeStyle, size: u32) -> Result<RgbaImage>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl QrRenderer for PlainRenderer {
    fn render(&self, payload: &str, style: &QrCodeStyle, size: u32) -> Result<RgbaImage> {
        if payload.is_empty() {
            bail!("cannot render an empty payload");
        }
        if size > MAX_RENDER_SIZE {
            bail!("requested size {size}px exceeds the {MAX_RENDER_SIZE}px limit");
        }

        // High-ish correction so a centre logo stays scannable.
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::Q)
            .context("payload does not fit in a QR code")?;
        let module_count = code.width() as u32;
        let colors = code.to_colors();

        let total_modules = module_count + 2 * QUIET_ZONE;
        let scale = (size / total_modules).max(1);
        let img_size = total_modules * scale;

        let background = Rgba(style.background_color.to_rgba8());
        let foreground = Rgba(style.foreground_color().to_rgba8());
        let mut img = RgbaImage::from_pixel(img_size, img_size, background);

        for (i, color) in colors.iter().enumerate() {
            if *color != qrcode::Color::Dark {
                continue;
            }
            let x = (i as u32 % module_count + QUIET_ZONE) * scale;
            let y = (i as u32 / module_count + QUIET_ZONE) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x + dx, y + dy, foreground);
                }
            }
        }

        if let Some(logo_data) = &style.logo_data {
            stamp_logo(&mut img, logo_data)?;
        }

        Ok(img)
    }
}

fn stamp_logo(img: &mut RgbaImage, logo_data: &[u8]) -> Result<()> {
    let edge = ((img.width() as f64) * LOGO_FRACTION).round() as u32;
    if edge == 0 {
        return Ok(());
    }

    let logo = decode_logo(logo_data)?
        .resize(edge, edge, FilterType::Triangle)
        .to_rgba8();
    let x = (img.width() - logo.width()) / 2;
    let y = (img.height() - logo.height()) / 2;
    imageops::overlay(img, &logo, x as i64, y as i64);
    Ok(())
}
