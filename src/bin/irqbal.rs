//! irqbal - IRQ balancing advisor.
//!
//! Reads an interrupt table and prints the current per-CPU distribution plus
//! pinning suggestions from one balancing strategy.
//!
//! Usage:
//!   irqbal                                   # analyze /proc/interrupts
//!   irqbal ./proc_interrupts.txt             # analyze a saved capture
//!   irqbal -s least-used                     # pick a strategy
//!   irqbal --compare                         # rank every strategy by stdev
//!   irqbal --format json                     # machine-readable output

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

use irqbal::analysis::{BalanceReport, BalanceStrategy, build_report, compare_strategies};
use irqbal::collector::{DEFAULT_INTERRUPTS_PATH, InterruptsCollector, RealFs};
use irqbal::fmt::{render_balance, render_comparison};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// IRQ balancing advisor.
#[derive(Parser)]
#[command(
    name = "irqbal",
    about = "Suggest IRQ to CPU pinning from an interrupt table",
    version
)]
struct Args {
    /// Interrupt table to analyze.
    #[arg(value_name = "FILE", default_value = DEFAULT_INTERRUPTS_PATH)]
    file: PathBuf,

    /// Balancing strategy: identity, alternating, least-used,
    /// sorted-least-used, reverse-sorted-least-used.
    #[arg(short, long, default_value = "reverse-sorted-least-used")]
    strategy: BalanceStrategy,

    /// Run every strategy and rank them by standard deviation.
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct BalanceOutput<'a> {
    current: &'a BalanceReport,
    projected: &'a BalanceReport,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("irqbal={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("irqbal {} starting", env!("CARGO_PKG_VERSION"));

    let mut collector = InterruptsCollector::new(RealFs::new(), &args.file);
    info!("reading interrupt table from {}", collector.path().display());

    let snapshot = collector.collect()?;
    let stats = collector.last_stats();
    debug!(
        "snapshot: {} CPUs, {} IRQs, {} excluded, {} malformed",
        snapshot.cpu_count, stats.parsed, stats.excluded, stats.malformed
    );
    if snapshot.is_empty() {
        warn!("no pinnable IRQs found in {}", args.file.display());
    }

    if args.compare {
        let reports = compare_strategies(&snapshot.records)
            .context("failed to compare balancing strategies")?;
        match args.format {
            OutputFormat::Text => print!("{}", render_comparison(&reports)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        }
        return Ok(());
    }

    let current = build_report(BalanceStrategy::Identity, &snapshot.records)
        .context("failed to measure current distribution")?;
    let projected = build_report(args.strategy, &snapshot.records)
        .with_context(|| format!("strategy {} failed", args.strategy))?;

    match args.format {
        OutputFormat::Text => print!("{}", render_balance(&current, &projected)),
        OutputFormat::Json => {
            let output = BalanceOutput {
                current: &current,
                projected: &projected,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
