use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pay_calculator::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use pay_calculator::error::PayrollResult;
use pay_calculator::input::write_report;

/// Prints the amount owed to each employee in a schedule file.
#[derive(Parser, Debug)]
#[command(name = "pay-calculator", version, about)]
struct Cli {
    /// Schedule file, one `NAME=DDHH:MM-HH:MM[,...]` line per employee.
    #[arg(default_value = "data/input.txt")]
    input: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only report lines. RUST_LOG=debug
    // shows the per-interval breakdown.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Processing aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> PayrollResult<()> {
    let loader = ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?;
    let stdout = io::stdout();
    write_report(&cli.input, loader.config(), &mut stdout.lock())?;
    Ok(())
}
