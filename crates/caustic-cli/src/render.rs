//! Plot projected points into an image.
//!
//! This is the only place nominal-frame coordinates meet pixel
//! dimensions; the pipeline itself never sees a width or height.

use std::path::Path;

use anyhow::{Context, Result};
use caustic::caustic_math::Point2;
use caustic::caustic_optics::FRAME_SIZE;
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const POINT: Rgb<u8> = Rgb([255, 255, 255]);

/// Map a nominal-frame point to a pixel, or `None` if it falls outside.
pub fn to_pixel(p: &Point2, width: u32, height: u32) -> Option<(u32, u32)> {
    let x = (p.x * width as f64 / FRAME_SIZE).floor();
    let y = (p.y * height as f64 / FRAME_SIZE).floor();
    // Written so NaN fails the test.
    if !(x >= 0.0 && y >= 0.0 && x < width as f64 && y < height as f64) {
        return None;
    }
    Some((x as u32, y as u32))
}

/// Plot each point as a single white pixel on black.
pub fn plot(points: &[Point2], width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for (x, y) in points.iter().filter_map(|p| to_pixel(p, width, height)) {
        img.put_pixel(x, y, POINT);
    }
    img
}

/// Plot points and write them to a PNG file.
pub fn write_png(points: &[Point2], width: u32, height: u32, path: &Path) -> Result<()> {
    plot(points, width, height)
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
