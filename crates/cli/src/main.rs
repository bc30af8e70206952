// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skipgrep::cli::Cli;
use skipgrep::cmd_search;
use skipgrep::error::ExitCode;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cmd_search::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("skipgrep: {err:#}");
            ExitCode::Failure.into()
        }
    }
}
