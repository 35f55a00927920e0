// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Foldcall command line equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::time::Duration;

use foldcall_equity::{Chips, EquityConfig, Estimate, Scenario, estimate};

#[derive(Debug, Parser)]
struct Cli {
    /// The player cards, i.e. "AD KD".
    #[clap(long, short = 'c')]
    hole: String,
    /// The known board cards, i.e. "2C 7H 9S".
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of opponents.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=22))]
    opponents: u8,
    /// The available chips.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// Number of simulated hands.
    #[clap(long, short, default_value_t = EquityConfig::SIMULATIONS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    simulations: u64,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
    /// Stop simulating after this many milliseconds.
    #[clap(long)]
    time_limit_ms: Option<u64>,
    /// Print the estimate as JSON.
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let scenario = Scenario::parse(&cli.hole, &cli.board, cli.opponents as usize)?;
    let config = EquityConfig {
        simulations: usize::try_from(cli.simulations)?,
        tasks: cli.tasks as usize,
        seed: cli.seed,
        time_limit: cli.time_limit_ms.map(Duration::from_millis),
    };

    let est = estimate(&scenario, Chips::new(cli.chips), &config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&est)?);
    } else {
        print_estimate(&est);
    }

    Ok(())
}

fn print_estimate(est: &Estimate) {
    println!("Win Rate:     {:.2}", est.win_rate);
    println!("Action:       {}", est.action);
    println!("Raise Amount: {}", est.raise);
    if est.truncated {
        println!("Simulations:  {} (time limit reached)", est.trials);
    } else {
        println!("Simulations:  {}", est.trials);
    }
}
