// File: crates/liftplot/src/main.rs
// Summary: CLI entry point; `liftplot <input-file>` charts a workout log into plots/.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use liftplot::{Config, Error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "liftplot",
    about = "Chart a workout log: top exercises and rep histograms",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Workout log CSV with Date, Exercise Name, Weight and Reps columns.
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let Some(input) = cli.input else {
        let program = std::env::args().next().unwrap_or_else(|| "liftplot".to_string());
        let usage = Error::Usage { program };
        println!("{usage}");
        return ExitCode::from(usage.exit_code());
    };

    match try_main(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn try_main(input: &Path) -> Result<()> {
    let config = Config::discover().context("loading configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    liftplot::run(input, &config, &mut out).with_context(|| format!("charting {}", input.display()))?;
    Ok(())
}
