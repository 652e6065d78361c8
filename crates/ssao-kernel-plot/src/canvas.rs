//! Minimal software raster target.

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::error::{PlotError, PlotResult};

/// White background, matching the default plot style.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// An RGBA image with clipped drawing primitives.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> PlotResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Sets a pixel; coordinates outside the canvas are ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    /// Fills the half-open rectangle `[x0, x1) x [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(i64::from(self.width()));
        let y1 = y1.min(i64::from(self.height()));
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Draws a line segment with a square brush of `thickness` pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: u32, color: Rgba<u8>) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let margin = thickness as f32;
        let bounds_max = Vec2::new(self.width() as f32, self.height() as f32) + margin;
        let Some((from, to)) = clip_segment(from, to, Vec2::splat(-margin), bounds_max) else {
            return;
        };
        // Bresenham over rounded endpoints
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let half = i64::from(thickness.max(1) - 1) / 2;
        let extra = i64::from(thickness.max(1) - 1) - half;

        loop {
            for oy in -half..=extra {
                for ox in -half..=extra {
                    self.put(x0 + ox, y0 + oy, color);
                }
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Returns the pixel at `(x, y)`, if inside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Liang-Barsky clipping of a segment against an axis-aligned box.
fn clip_segment(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let d = to - from;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (p, q) in [
        (-d.x, from.x - min.x),
        (d.x, max.x - from.x),
        (-d.y, from.y - min.y),
        (d.y, max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((from + d * t0, from + d * t1))
}
