mod config;
mod data;
mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use config::PipelineConfig;

#[derive(Debug, Parser)]
#[command(
    name = "magma-particles",
    version,
    about = "Convert a wavelet magnitude matrix into particle-field JSON"
)]
struct Cli {
    #[arg(value_name = "INPUT", help = "Source matrix [default: wavelet_2D_matrix.txt]")]
    input: Option<PathBuf>,
    #[arg(value_name = "OUTPUT", help = "Destination JSON [default: wavelet_data.json]")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = PipelineConfig::with_paths(cli.input, cli.output);
    log::debug!("running with {config:?}");

    match pipeline::run(&config) {
        Ok(summary) => {
            log::info!(
                "{} -> {} cells written to {}{}",
                summary.source,
                summary.downsampled.area(),
                summary.output.display(),
                if summary.degenerate { " (unscaled)" } else { "" }
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
