// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stixcheck CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use stixcheck::cli::StandaloneCli;
use stixcheck::config::{self, FileConfig};
use stixcheck::discovery;
use stixcheck::error::ExitCode;

mod cmd_validate;

/// `STIXCHECK_LOG` wins; otherwise `--verbose` turns on debug logs.
fn init_logging(verbose: bool) {
    let default = if verbose { "stixcheck=debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("STIXCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = StandaloneCli::parse();
    init_logging(cli.options.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("stixcheck: {}", e);
            match e.downcast_ref::<stixcheck::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: StandaloneCli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;

    let config: Option<FileConfig> = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Some(config::load_with_warnings(path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            None
        }
    };

    let options = cli.into_options(config.as_ref())?;
    cmd_validate::run(&options)
}
