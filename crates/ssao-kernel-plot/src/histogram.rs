//! Density histogram of sample lengths.

use image::{Rgba, RgbaImage};
use ssao_kernel_core::MAX_HISTOGRAM_BINS;

use crate::canvas::{Canvas, BACKGROUND};
use crate::error::{PlotError, PlotResult};

const BAR: Rgba<u8> = Rgba([31, 119, 180, 255]);
const AXIS: Rgba<u8> = Rgba([60, 60, 60, 255]);

/// Histogram of a set of values, normalized as a probability density.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub min: f32,
    /// Right edge of the last bin.
    pub max: f32,
    /// Density of each bin; `sum(density * bin_width) == 1` unless empty.
    pub densities: Vec<f32>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width bins spanning their range.
    ///
    /// The last bin is closed on the right. A constant input is spread over
    /// `[v - 0.5, v + 0.5]`; an empty input yields the range `[0, 1]` with
    /// all-zero densities.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn compute(values: &[f32], bins: usize) -> PlotResult<Self> {
        if bins == 0 {
            return Err(PlotError::NoBins);
        }
        if bins > MAX_HISTOGRAM_BINS {
            return Err(PlotError::TooManyBins(bins));
        }

        let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Ok(Self {
                min: 0.0,
                max: 1.0,
                densities: vec![0.0; bins],
            });
        }

        let (mut min, mut max) = finite
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f32;
        let mut counts = vec![0usize; bins];
        for v in &finite {
            let idx = (((v - min) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let norm = finite.len() as f32 * width;
        Ok(Self {
            min,
            max,
            densities: counts.into_iter().map(|c| c as f32 / norm).collect(),
        })
    }

    pub fn bins(&self) -> usize {
        self.densities.len()
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn bin_width(&self) -> f32 {
        (self.max - self.min) / self.bins() as f32
    }

    /// Largest bin density.
    pub fn peak(&self) -> f32 {
        self.densities.iter().copied().fold(0.0, f32::max)
    }
}

/// Renders `histogram` as a bar chart.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
pub fn render_histogram(histogram: &Histogram, width: u32, height: u32) -> PlotResult<RgbaImage> {
    let mut canvas = Canvas::new(width, height, BACKGROUND)?;

    let margin = (width.min(height) / 12).max(1);
    let left = i64::from(margin);
    let bottom = i64::from(height) - i64::from(margin);
    let plot_w = (i64::from(width) - 2 * left).max(1) as f32;
    let plot_h = (bottom - i64::from(margin)).max(1) as f32;

    let peak = histogram.peak();
    if peak > 0.0 {
        let bar_w = plot_w / histogram.bins() as f32;
        for (i, density) in histogram.densities.iter().enumerate() {
            if *density <= 0.0 {
                continue;
            }
            let x0 = left + (i as f32 * bar_w).floor() as i64;
            let x1 = (left + ((i + 1) as f32 * bar_w).floor() as i64).max(x0 + 1);
            let bar_h = ((density / peak) * plot_h).round().max(1.0) as i64;
            canvas.fill_rect(x0, bottom - bar_h, x1, bottom, BAR);
        }
    }

    // Axes
    let right = left + plot_w as i64;
    canvas.fill_rect(left - 1, bottom, right + 1, bottom + 1, AXIS);
    canvas.fill_rect(left - 1, i64::from(margin), left, bottom + 1, AXIS);

    log::debug!(
        "rendered histogram: {} bins over [{}, {}], peak density {peak}",
        histogram.bins(),
        histogram.min,
        histogram.max
    );
    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_bins() {
        assert!(matches!(Histogram::compute(&[0.5], 0), Err(PlotError::NoBins)));
    }

    #[test]
    fn test_too_many_bins() {
        let err = Histogram::compute(&[0.5], usize::MAX).unwrap_err();
        assert!(matches!(err, PlotError::TooManyBins(usize::MAX)));
    }

    #[test]
    fn test_simple_counts() {
        let h = Histogram::compute(&[0.0, 0.25, 0.5, 1.0], 4).unwrap();
        assert_eq!(h.min, 0.0);
        assert_eq!(h.max, 1.0);
        // Last bin is closed on the right, so 1.0 lands in bin 3
        assert_eq!(h.densities, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_constant_values() {
        let h = Histogram::compute(&[0.3, 0.3, 0.3], 2).unwrap();
        assert!((h.min - -0.2).abs() < 1e-6);
        assert!((h.max - 0.8).abs() < 1e-6);
        assert_eq!(h.densities[0], 0.0);
        assert!((h.densities[1] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_values() {
        let h = Histogram::compute(&[], 10).unwrap();
        assert_eq!(h.bins(), 10);
        assert_eq!(h.peak(), 0.0);
        let image = render_histogram(&h, 100, 80).unwrap();
        assert_eq!(image.dimensions(), (100, 80));
    }

    #[test]
    fn test_render_draws_bars() {
        let h = Histogram::compute(&[0.1, 0.2, 0.2, 0.9], 8).unwrap();
        let image = render_histogram(&h, 200, 100).unwrap();
        let bars = image.pixels().filter(|p| **p == BAR).count();
        assert!(bars > 0);
    }

    proptest! {
        #[test]
        fn prop_density_integrates_to_one(
            values in prop::collection::vec(0.0f32..1.0, 1..400),
            bins in 1usize..600,
        ) {
            let h = Histogram::compute(&values, bins).unwrap();
            let total: f32 = h.densities.iter().map(|d| d * h.bin_width()).sum();
            prop_assert!((total - 1.0).abs() < 1e-3, "total = {}", total);
        }
    }
}
