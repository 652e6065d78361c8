//! 3D quiver plot of kernel samples.
//!
//! Every sample is drawn as an arrow from the origin to the sample position,
//! colored by its length. Reference axes of unit length are drawn first.

use glam::{Vec2, Vec3};
use image::{Rgba, RgbaImage};
use ssao_kernel_core::KernelSamples;

use crate::camera::Camera;
use crate::canvas::{Canvas, BACKGROUND};
use crate::color_maps::ColorMap;
use crate::error::PlotResult;

const AXIS_X: Rgba<u8> = Rgba([214, 39, 40, 255]);
const AXIS_Y: Rgba<u8> = Rgba([44, 160, 44, 255]);
const AXIS_Z: Rgba<u8> = Rgba([31, 119, 180, 255]);
const GRID: Rgba<u8> = Rgba([220, 220, 220, 255]);

/// Quiver plot style.
#[derive(Debug, Clone)]
pub struct QuiverStyle {
    /// Arrow shaft thickness in pixels.
    pub line_width: u32,
    /// Arrow head length in pixels (capped by the projected arrow length).
    pub head_length: f32,
    /// Half-angle of the arrow head, radians.
    pub head_angle: f32,
    /// Camera yaw applied to the default front view, radians.
    pub yaw: f32,
    /// Camera pitch applied to the default front view, radians.
    pub pitch: f32,
    /// Whether to draw the reference axes and ground grid.
    pub show_axes: bool,
}

impl Default for QuiverStyle {
    fn default() -> Self {
        Self {
            line_width: 1,
            head_length: 8.0,
            head_angle: 0.45,
            yaw: 0.7,
            pitch: 0.45,
            show_axes: true,
        }
    }
}

/// Builds the camera framing the unit upper hemisphere.
#[allow(clippy::cast_precision_loss)]
pub fn quiver_camera(width: u32, height: u32, style: &QuiverStyle) -> Camera {
    let mut camera = Camera::new(width as f32 / height as f32);
    camera.look_at_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::ONE);
    camera.orbit(style.yaw, style.pitch);
    camera
}

/// Renders the quiver plot of `samples`.
pub fn render_quiver(
    samples: &KernelSamples,
    width: u32,
    height: u32,
    style: &QuiverStyle,
) -> PlotResult<RgbaImage> {
    let mut canvas = Canvas::new(width, height, BACKGROUND)?;
    let camera = quiver_camera(width, height, style);
    let project = |p: Vec3| camera.project(p, width, height);

    if style.show_axes {
        draw_ground_grid(&mut canvas, &camera);
        for (axis, color) in [(Vec3::X, AXIS_X), (Vec3::Y, AXIS_Y), (Vec3::Z, AXIS_Z)] {
            if let (Some(a), Some(b)) = (project(Vec3::ZERO), project(axis)) {
                canvas.draw_line(a, b, 1, color);
            }
        }
    }

    let cmap = ColorMap::viridis();
    let Some(origin) = project(Vec3::ZERO) else {
        return Ok(canvas.into_image());
    };

    // Longest arrows last so short ones near the origin don't cover them
    let mut arrows: Vec<Vec3> = samples.iter().collect();
    arrows.sort_by(|a, b| a.length().total_cmp(&b.length()));

    for tip in arrows {
        let Some(tip_px) = project(tip) else {
            continue;
        };
        let color = cmap.sample_rgba(tip.length());
        draw_arrow(&mut canvas, origin, tip_px, style, color);
    }

    log::debug!("rendered quiver plot of {} samples", samples.len());
    Ok(canvas.into_image())
}

fn draw_ground_grid(canvas: &mut Canvas, camera: &Camera) {
    let (w, h) = (canvas.width(), canvas.height());
    for i in 0..=4u8 {
        let t = f32::from(i) * 0.5 - 1.0;
        let lines = [
            (Vec3::new(t, 0.0, -1.0), Vec3::new(t, 0.0, 1.0)),
            (Vec3::new(-1.0, 0.0, t), Vec3::new(1.0, 0.0, t)),
        ];
        for (a, b) in lines {
            if let (Some(a), Some(b)) = (camera.project(a, w, h), camera.project(b, w, h)) {
                canvas.draw_line(a, b, 1, GRID);
            }
        }
    }
}

fn draw_arrow(canvas: &mut Canvas, from: Vec2, to: Vec2, style: &QuiverStyle, color: Rgba<u8>) {
    canvas.draw_line(from, to, style.line_width, color);

    let shaft = to - from;
    let length = shaft.length();
    if length < 1.0 {
        return;
    }
    let back = -shaft / length;
    let head = style.head_length.min(length * 0.3);
    for angle in [style.head_angle, -style.head_angle] {
        let wing = Vec2::from_angle(angle).rotate(back) * head;
        canvas.draw_line(to, to + wing, style.line_width, color);
    }
}
