//! Configuration options for kernel generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Algorithm, KernelError, OutputFormat, PoissonParams, Result};

/// Default number of kernel samples.
pub const DEFAULT_SAMPLE_COUNT: usize = 64;

/// Upper bound on histogram bins.
pub const MAX_HISTOGRAM_BINS: usize = 1 << 16;

/// Plot image configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Output image path (`None` = default name for the plot kind).
    pub path: Option<PathBuf>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of histogram bins.
    pub bins: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            path: None,
            width: 800,
            height: 600,
            bins: 500,
        }
    }
}

impl PlotOptions {
    /// Returns the configured path or the default name for `output`.
    pub fn path_for(&self, output: OutputFormat) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            PathBuf::from(match output {
                OutputFormat::Plot2d => "ssao_kernel_histogram.png",
                _ => "ssao_kernel_quiver.png",
            })
        })
    }
}

/// Options for one generator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelOptions {
    /// Sampling algorithm.
    pub algorithm: Algorithm,
    /// Output selector.
    pub output: OutputFormat,
    /// Number of samples (N).
    pub samples: usize,
    /// RNG seed (`None` = seeded from entropy).
    pub seed: Option<u64>,
    /// Poisson sampling parameters.
    pub poisson: PoissonParams,
    /// Plot image settings.
    pub plot: PlotOptions,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Uniform,
            output: OutputFormat::Plot,
            samples: DEFAULT_SAMPLE_COUNT,
            seed: None,
            poisson: PoissonParams::default(),
            plot: PlotOptions::default(),
        }
    }
}

impl KernelOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON file. Missing fields take their defaults.
    ///
    /// Ranges are not checked here so that later overrides can still fix
    /// them; call [`KernelOptions::validate`] on the final options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_json(&text)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parses options from a JSON string without range checks.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm == Algorithm::Poisson {
            self.poisson.validate()?;
        }
        if self.output.is_plot() {
            if self.plot.width == 0 || self.plot.height == 0 {
                return Err(KernelError::InvalidParameter(format!(
                    "plot size must be non-zero, got {}x{}",
                    self.plot.width, self.plot.height
                )));
            }
            if self.plot.bins == 0 || self.plot.bins > MAX_HISTOGRAM_BINS {
                return Err(KernelError::InvalidParameter(format!(
                    "histogram bins must be in 1..={MAX_HISTOGRAM_BINS}, got {}",
                    self.plot.bins
                )));
            }
        }
        Ok(())
    }

    /// Sets the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the output selector.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Sets the sample count.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the plot settings.
    #[must_use]
    pub fn with_plot(mut self, plot: PlotOptions) -> Self {
        self.plot = plot;
        self
    }
}
