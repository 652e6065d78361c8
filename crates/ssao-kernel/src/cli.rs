//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use ssao_kernel_core::{Algorithm, KernelOptions, OutputFormat, Result};

/// Generate SSAO sample kernels and plot them or emit them as shader source.
#[derive(Debug, Parser)]
#[command(name = "ssao-kernel", version)]
pub struct Cli {
    /// Sampling algorithm [default: uniform]
    #[arg(
        value_parser = PossibleValuesParser::new(Algorithm::ALL.map(Algorithm::name))
            .try_map(|s| s.parse::<Algorithm>())
    )]
    pub algorithm: Option<Algorithm>,

    /// What to do with the kernel: image plots or text/binary on stdout [default: plot]
    #[arg(
        short,
        long,
        value_parser = PossibleValuesParser::new(OutputFormat::ALL.map(OutputFormat::name))
            .try_map(|s| s.parse::<OutputFormat>())
    )]
    pub output: Option<OutputFormat>,

    /// Number of samples [default: 64]
    #[arg(short = 'N', long)]
    pub samples: Option<usize>,

    /// RNG seed for reproducible kernels
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON options file; explicit flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plot image path (.png, .jpg)
    #[arg(long)]
    pub plot_file: Option<PathBuf>,

    /// Plot image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Plot image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Histogram bin count
    #[arg(long)]
    pub bins: Option<usize>,
}

impl Cli {
    /// Resolves the final options: config file (or defaults), then flags.
    pub fn into_options(self) -> Result<KernelOptions> {
        let mut options = match &self.config {
            Some(path) => KernelOptions::load(path)?,
            None => KernelOptions::default(),
        };

        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(samples) = self.samples {
            options.samples = samples;
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(path) = self.plot_file {
            options.plot.path = Some(path);
        }
        if let Some(width) = self.width {
            options.plot.width = width;
        }
        if let Some(height) = self.height {
            options.plot.height = height;
        }
        if let Some(bins) = self.bins {
            options.plot.bins = bins;
        }

        options.validate()?;
        Ok(options)
    }
}
