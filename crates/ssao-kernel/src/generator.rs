//! Kernel generation and output dispatch.

use std::io::Write;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ssao_kernel_core::{
    export, generate, KernelError, KernelOptions, KernelSamples, OutputFormat, Result,
};
use ssao_kernel_plot::PlotKind;

/// Result of a generator run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The generated kernel.
    pub samples: KernelSamples,
    /// Where the plot was saved, for the plot outputs.
    pub plot_path: Option<PathBuf>,
}

/// Creates the random number generator for `options`.
pub fn make_rng(options: &KernelOptions) -> StdRng {
    match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates the kernel described by `options`.
pub fn generate_kernel(options: &KernelOptions) -> Result<KernelSamples> {
    let mut rng = make_rng(options);
    let samples = generate(options.algorithm, options.samples, &mut rng, &options.poisson)?;
    log::info!(
        "generated {} samples with '{}' sampling",
        samples.len(),
        options.algorithm
    );
    Ok(samples)
}

/// Generates a kernel and emits it according to `options.output`.
///
/// Text and binary outputs go to `out`; plots are written to the image file
/// named by the plot options.
pub fn run<W: Write + ?Sized>(options: &KernelOptions, out: &mut W) -> Result<RunOutcome> {
    options.validate()?;
    let samples = generate_kernel(options)?;

    let plot_path = match PlotKind::from_output(options.output) {
        Some(kind) => {
            let path = options.plot.path_for(options.output);
            let image = ssao_kernel_plot::render(kind, &samples, &options.plot)
                .map_err(|e| KernelError::Plot(e.to_string()))?;
            ssao_kernel_plot::save_image(&path, &image)
                .map_err(|e| KernelError::Plot(format!("failed to save {}: {e}", path.display())))?;
            Some(path)
        }
        None => {
            if samples.is_empty() && matches!(options.output, OutputFormat::C | OutputFormat::Wgsl) {
                log::warn!("emitting a zero-sized array, which shader compilers reject");
            }
            export(options.output, options.algorithm, &samples, out)?;
            out.flush()?;
            log::debug!("wrote '{}' output", options.output);
            None
        }
    };

    Ok(RunOutcome { samples, plot_path })
}
