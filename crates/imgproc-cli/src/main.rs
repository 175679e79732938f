//! imgproc command-line front end. Applies one image operation per invocation.

mod args;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::commands::Outcome;
use crate::config::AppConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::default().with_overrides(args.raw_dir.clone(), args.result_dir.clone());
    tracing::debug!("raw dir {}", config.raw_dir.display());
    tracing::info!("running {:?}", args.command);

    match commands::run(&args.command, &config) {
        Ok(Outcome::Written(path)) => {
            tracing::info!("artifact written");
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Text(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
