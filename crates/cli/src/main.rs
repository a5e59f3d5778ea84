// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, Subcommand};
use log::error;
use std::{path::PathBuf, process::ExitCode};

use omaha_cli::{Config, DealConfig, Format};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the deals in a file.
    Eval {
        /// The deals input file.
        input: PathBuf,
        /// The results output file, writes to stdout if missing.
        output: Option<PathBuf>,
        /// The results format.
        #[clap(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Number of evaluation threads.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Writes random deals.
    Deal {
        /// Number of deals.
        #[clap(long, short, default_value_t = 10)]
        count: usize,
        /// Seed for reproducible deals.
        #[clap(long, short)]
        seed: Option<u64>,
        /// The deals output file, writes to stdout if missing.
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let res = match Cli::parse().command {
        Command::Eval {
            input,
            output,
            format,
            tasks,
        } => omaha_cli::run(&Config {
            input,
            output,
            format,
            tasks: tasks as usize,
        }),
        Command::Deal {
            count,
            seed,
            output,
        } => omaha_cli::generate(&DealConfig {
            count,
            seed,
            output,
        }),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
