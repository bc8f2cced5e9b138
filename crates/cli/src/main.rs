//! Cache hierarchy simulator CLI.
//!
//! Replays a load/store trace through the modeled hierarchy and prints the
//! `(l1_miss_rate, l2_miss_rate, aat)` tuple. `--stats` adds the full
//! statistics table; `--json` prints the report as JSON instead; `--config`
//! overrides the memory size and timing constants from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use cachesim_core::sim::trace;
use cachesim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Multi-level cache hierarchy simulator",
    long_about = "Replay a trace of loads and stores through a three-level cache \
hierarchy (direct-mapped L1, 4-entry victim buffer, 8-way L2) and report per-level \
miss rates and the average access time estimate.\n\nTrace format: one access per \
line, four comma-separated integers: load flag, store flag, address, data.\n\n\
Examples:\n  sim traces/conflict.txt\n  sim traces/conflict.txt --stats\n  sim traces/conflict.txt --json\n  sim traces/conflict.txt --config machine.json"
)]
struct Cli {
    /// Trace file to replay.
    trace: PathBuf,

    /// JSON configuration file (memory size, timing constants); omitted
    /// fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full statistics table after the result tuple.
    #[arg(long)]
    stats: bool,

    /// Print the report as JSON instead of the result tuple.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let records = trace::load_trace(&cli.trace).unwrap_or_else(|e| {
        eprintln!("Error reading trace {}: {}", cli.trace.display(), e);
        process::exit(1);
    });

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => Config::default(),
    };

    let mut sim = Simulator::new(&config);
    let report = sim.run(&records).unwrap_or_else(|e| {
        eprintln!("Error replaying trace: {e}");
        process::exit(1);
    });

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "({:.10},{:.10},{:.10})",
        report.l1_miss_rate, report.l2_miss_rate, report.aat
    );

    if cli.stats {
        sim.cache.stats.print(sim.timing());
    }
}

fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path.display(), e);
        process::exit(1);
    })
}
