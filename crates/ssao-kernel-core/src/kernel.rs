//! Kernel sample storage.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{KernelError, Result};

/// GPU representation of a single kernel sample (vec4 with w = 0).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct GpuSample {
    pub position: [f32; 3],
    pub _padding: f32,
}

impl From<Vec3> for GpuSample {
    fn from(v: Vec3) -> Self {
        Self {
            position: v.to_array(),
            _padding: 0.0,
        }
    }
}

/// A generated SSAO kernel, stored as three parallel coordinate sequences.
///
/// `y` is the hemisphere axis. The three sequences always have the same
/// length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KernelSamples {
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
}

impl KernelSamples {
    /// Creates an empty kernel with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    /// Builds a kernel from its coordinate sequences.
    ///
    /// # Errors
    /// Returns [`KernelError::SizeMismatch`] if the sequences differ in length.
    pub fn from_components(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Result<Self> {
        let expected = x.len();
        for actual in [y.len(), z.len()] {
            if actual != expected {
                return Err(KernelError::SizeMismatch { expected, actual });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Builds a kernel from sample vectors.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut samples = Self::with_capacity(points.len());
        for p in points {
            samples.push(*p);
        }
        samples
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: Vec3) {
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.z.push(sample.z);
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the kernel holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn z(&self) -> &[f32] {
        &self.z
    }

    /// Returns the sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        if index < self.len() {
            Some(Vec3::new(self.x[index], self.y[index], self.z[index]))
        } else {
            None
        }
    }

    /// Iterates over the samples as vectors.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Vec3::new(x, y, z))
    }

    /// Returns the samples as 4-vectors with a zero w component.
    pub fn to_vec4(&self) -> Vec<Vec4> {
        self.iter().map(|v| v.extend(0.0)).collect()
    }

    /// Returns the samples in GPU layout.
    pub fn to_gpu(&self) -> Vec<GpuSample> {
        self.iter().map(GpuSample::from).collect()
    }

    /// Returns the Euclidean norm of every sample.
    pub fn radii(&self) -> Vec<f32> {
        self.iter().map(Vec3::length).collect()
    }

    /// Returns the component-wise bounds of the samples, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }
}
