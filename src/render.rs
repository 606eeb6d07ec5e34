//! On-demand rasterization of a flattened drawing series.
//!
//! A drawing travels as a bracketed, comma-separated list of floats. To
//! render it we parse the list, reshape it row-major into a square
//! `grid_size x grid_size` grid, min-max normalize into 8-bit grayscale,
//! and PNG-encode the result. Nothing is ever written to disk.

use std::io::Cursor;

use bytes::Bytes;
use image::{GrayImage, ImageFormat, Luma};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid number '{token}' at position {index}")]
    InvalidNumber { index: usize, token: String },
    #[error("Series has {actual} elements, expected {expected} ({side}x{side} grid)")]
    BadShape {
        expected: usize,
        actual: usize,
        side: u32,
    },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Parse a bracketed, comma-separated series of floats.
///
/// Leading and trailing bracket characters are stripped before splitting,
/// so `[1,2,3]`, `1,2,3`, and `[[1,2,3]]` all parse the same way. The
/// first unparseable token fails the whole series.
pub fn parse_series(raw: &str) -> Result<Vec<f64>, RenderError> {
    raw.trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| RenderError::InvalidNumber {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Rasterize a flat series as a square grayscale PNG.
///
/// The series is laid out row-major and must contain exactly
/// `grid_size * grid_size` elements. Values are min-max normalized so the
/// smallest maps to black and the largest to white; a series with no
/// spread (or non-finite entries) maps to black.
pub fn render_png(values: &[f64], grid_size: u32) -> Result<Bytes, RenderError> {
    let expected = grid_size as usize * grid_size as usize;
    if values.len() != expected {
        return Err(RenderError::BadShape {
            expected,
            actual: values.len(),
            side: grid_size,
        });
    }

    let finite = values.iter().copied().filter(|v| v.is_finite());
    let min = finite.clone().fold(f64::INFINITY, f64::min);
    let max = finite.fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let mut img = GrayImage::new(grid_size, grid_size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let v = values[y as usize * grid_size as usize + x as usize];
        let level = if v.is_finite() && range > 0.0 && range.is_finite() {
            ((v - min) / range * 255.0).round() as u8
        } else {
            0
        };
        *pixel = Luma([level]);
    }

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(Bytes::from(buf))
}

/// Parse and rasterize a path-embedded series in one step.
pub fn plot_series(raw: &str, grid_size: u32) -> Result<Bytes, RenderError> {
    let values = parse_series(raw)?;
    render_png(&values, grid_size)
}
