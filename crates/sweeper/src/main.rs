// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use shiftflow_api::{
    LogNotifier, NullRenderer, SystemClock, generate_invoices, run_settlement_sweep,
};
use shiftflow_persistence::Persistence;
use std::time::Duration;
use tracing::{error, info};

/// Shiftflow Sweeper - scheduled lifecycle and invoice sweeps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Seconds to wait between sweep passes
    #[arg(short, long, default_value_t = 300)]
    interval: u64,

    /// Run a single sweep pass and exit
    #[arg(long)]
    once: bool,

    /// Skip the weekly invoice generation pass
    #[arg(long)]
    skip_invoices: bool,
}

/// Runs one lifecycle sweep and, unless disabled, one invoice pass.
fn run_pass(store: &mut Persistence, skip_invoices: bool) {
    let clock = SystemClock;
    let notifier = LogNotifier;
    let renderer = NullRenderer;

    match run_settlement_sweep(store, &clock, &notifier) {
        Ok(report) => info!(?report, "Lifecycle sweep complete"),
        Err(e) => error!(error = %e, "Lifecycle sweep failed"),
    }

    if !skip_invoices {
        match generate_invoices(store, &clock, &notifier, &renderer) {
            Ok(report) => info!(?report, "Invoice pass complete"),
            Err(e) => error!(error = %e, "Invoice pass failed"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shiftflow sweeper");

    let mut store: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.once {
        run_pass(&mut store, args.skip_invoices);
        return Ok(());
    }

    info!(interval = args.interval, "Sweeping on a fixed interval");
    loop {
        run_pass(&mut store, args.skip_invoices);
        std::thread::sleep(Duration::from_secs(args.interval));
    }
}
