use anyhow::{Context, Result};
use clap::Parser;
use qbitify_core::QbitifyError;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod customize;

use cli::Cli;
use customize::{handle_customize, CustomizeArgs};

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let result = run(cli);

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            // The precondition message stands on its own
            if matches!(
                e.downcast_ref::<QbitifyError>(),
                Some(QbitifyError::MissingBuildDescriptor { .. })
            ) {
                eprintln!("{e}");
            } else {
                eprintln!("Error: {e:#}");
            }
            process::exit(1);
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.directory)?;
    let use_color = !cli.no_color && io::stdout().is_terminal();

    handle_customize(CustomizeArgs {
        root: &root,
        answers: cli.answers,
        yes: cli.yes,
        policy: cli.policy,
        output: cli.output,
        use_color,
    })
}

fn resolve_root(directory: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(match directory {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}
