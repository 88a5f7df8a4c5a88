// Grayscale raster of a banded escape field.
// Low bands render dark, unfilled cells are left white.

use image::{GrayImage, Luma};
use std::path::Path;
use tracing::info;

use crate::contour::ContourLevels;
use crate::error::Result;
use crate::field::EscapeSurface;

const UNFILLED: u8 = 255;

/// Luminance of band `band` out of `bands`, black to white.
pub fn band_luma(band: usize, bands: usize) -> u8 {
    if bands <= 1 {
        return 0;
    }
    ((band as f64 / (bands - 1) as f64) * 255.0).round() as u8
}

/// Render one pixel per cell. Image row 0 is the highest Y sample.
pub fn render_gray(surface: &EscapeSurface, levels: &ContourLevels) -> GrayImage {
    let (rows, cols) = surface.field.shape();
    let bands = levels.band_count();

    GrayImage::from_fn(cols as u32, rows as u32, |px, py| {
        let row = rows - 1 - py as usize;
        let luma = surface.field
            .get(row, px as usize)
            .and_then(|v| levels.band_of(v))
            .map(|b| band_luma(b, bands))
            .unwrap_or(UNFILLED);
        Luma([luma])
    })
}

/// Render and write a PNG (format picked from the extension).
pub fn save_png<P: AsRef<Path>>(surface: &EscapeSurface, levels: &ContourLevels, path: P) -> Result<()> {
    let img = render_gray(surface, levels);
    img.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), width = img.width(), height = img.height(), "wrote escape image");
    Ok(())
}
