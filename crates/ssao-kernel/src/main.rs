use std::io::{self, BufWriter};

use clap::Parser;
use ssao_kernel::cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = cli.into_options().and_then(|options| {
        log::debug!("options: {options:?}");
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        ssao_kernel::run(&options, &mut out)
    });

    match result {
        Ok(outcome) => {
            if let Some(path) = outcome.plot_path {
                eprintln!("Saved plot to {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
