//! Hemisphere sampling algorithms for SSAO kernels.
//!
//! Samples live in the upper hemisphere around the +Y axis. Each direction is
//! scaled by a squared random radius so that samples cluster near the origin,
//! where occlusion contributes the most.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{KernelError, KernelSamples, Result};

/// Sampling algorithm used to build a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// Independent uniform draws of angles and radius.
    #[default]
    Uniform,
    /// Uniform draws filtered by a minimum spacing (dart throwing).
    Poisson,
}

impl Algorithm {
    /// All algorithms, in CLI order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Uniform, Algorithm::Poisson];

    /// Returns the selector name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Uniform => "uniform",
            Algorithm::Poisson => "poisson",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Algorithm {
    type Error = KernelError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.name().to_string()
    }
}

impl FromStr for Algorithm {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}

/// Parameters for [`poisson`] sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoissonParams {
    /// Initial minimum distance between samples (`None` = derived from the count).
    pub min_distance: Option<f32>,
    /// Consecutive rejections tolerated before the distance is relaxed.
    pub max_attempts: u32,
    /// Factor applied to the minimum distance on relaxation, in (0, 1).
    pub relaxation: f32,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_attempts: 30,
            relaxation: 0.9,
        }
    }
}

impl PoissonParams {
    /// Sets the initial minimum distance.
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = Some(min_distance);
        self
    }

    /// Sets the number of attempts before relaxing.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the relaxation factor.
    #[must_use]
    pub fn with_relaxation(mut self, relaxation: f32) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Checks that the parameters guarantee termination.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.min_distance {
            if !d.is_finite() || d < 0.0 {
                return Err(KernelError::InvalidParameter(format!(
                    "poisson min_distance must be finite and >= 0, got {d}"
                )));
            }
        }
        if self.max_attempts == 0 {
            return Err(KernelError::InvalidParameter(
                "poisson max_attempts must be > 0".to_string(),
            ));
        }
        if !(self.relaxation > 0.0 && self.relaxation < 1.0) {
            return Err(KernelError::InvalidParameter(format!(
                "poisson relaxation must be in (0, 1), got {}",
                self.relaxation
            )));
        }
        Ok(())
    }

    /// Initial spacing for a kernel of `n` samples.
    #[allow(clippy::cast_precision_loss)]
    pub fn initial_distance(&self, n: usize) -> f32 {
        self.min_distance
            .unwrap_or_else(|| 0.8 * (n.max(1) as f32).powf(-1.0 / 3.0))
    }
}

/// Draws a single hemisphere sample.
///
/// theta in [0, 2pi), phi in [0, pi/2), r in [0, 1) then squared. The result
/// has length `r` and a non-negative y component.
pub fn uniform_sample<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta: f32 = rng.gen_range(0.0..TAU);
    let phi: f32 = rng.gen_range(0.0..FRAC_PI_2);
    let r: f32 = rng.gen_range(0.0..1.0);
    let r = r * r;

    let t = phi.cos();
    Vec3::new(r * t * theta.cos(), r * phi.sin(), r * t * theta.sin())
}

/// Generates `n` independent hemisphere samples.
pub fn uniform<R: Rng + ?Sized>(n: usize, rng: &mut R) -> KernelSamples {
    let mut samples = KernelSamples::with_capacity(n);
    for _ in 0..n {
        samples.push(uniform_sample(rng));
    }
    samples
}

/// Generates `n` hemisphere samples with a minimum spacing.
///
/// Candidates come from [`uniform_sample`]. A candidate closer than the
/// current minimum distance to an accepted sample is rejected; after
/// `max_attempts` consecutive rejections the distance shrinks by
/// `relaxation`. Always returns exactly `n` samples.
///
/// # Errors
/// Returns [`KernelError::InvalidParameter`] if `params` fail validation.
pub fn poisson<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    params: &PoissonParams,
) -> Result<KernelSamples> {
    params.validate()?;

    let mut min_distance = params.initial_distance(n);
    let mut accepted: Vec<Vec3> = Vec::with_capacity(n);
    let mut rejections = 0u32;
    let mut relaxations = 0u32;

    while accepted.len() < n {
        let candidate = uniform_sample(rng);
        let min_sq = min_distance * min_distance;
        if accepted
            .iter()
            .all(|p| p.distance_squared(candidate) >= min_sq)
        {
            accepted.push(candidate);
            rejections = 0;
            continue;
        }

        rejections += 1;
        if rejections >= params.max_attempts {
            min_distance *= params.relaxation;
            rejections = 0;
            relaxations += 1;
            log::trace!(
                "poisson: relaxed min distance to {min_distance} at {}/{n} samples",
                accepted.len()
            );
        }
    }

    log::debug!(
        "poisson: {n} samples, final min distance {min_distance}, {relaxations} relaxations"
    );
    Ok(KernelSamples::from_points(&accepted))
}

/// Generates a kernel of `n` samples with the given algorithm.
pub fn generate<R: Rng + ?Sized>(
    algorithm: Algorithm,
    n: usize,
    rng: &mut R,
    params: &PoissonParams,
) -> Result<KernelSamples> {
    match algorithm {
        Algorithm::Uniform => Ok(uniform(n, rng)),
        Algorithm::Poisson => poisson(n, rng, params),
    }
}
