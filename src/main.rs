use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, Level};

use heart_monitor_sim::config::{
    BATCH_SIZE, BURST_INTERVAL, BURST_SIZE, DVFS_SWITCH_BATCHES, MAX_SAMPLES, RATE_INTERVAL,
};
use heart_monitor_sim::host::{gather_host_info, log_host_info};
use heart_monitor_sim::{HeartMonitor, MonitorConfig, ThreadSleepPacer};

/// Simulate a heart-rate monitor's CPU workload.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Samples acquired between two pauses
    #[arg(long, default_value_t = BATCH_SIZE)]
    batch_size: u64,

    /// Operations per DSP burst
    #[arg(long, default_value_t = BURST_SIZE)]
    burst_size: u64,

    /// Samples between two DSP bursts
    #[arg(long, default_value_t = BURST_INTERVAL)]
    burst_interval: u64,

    /// Samples between two heart rate reports
    #[arg(long, default_value_t = RATE_INTERVAL)]
    rate_interval: u64,

    /// Stop on the first sample past this count
    #[arg(long, default_value_t = MAX_SAMPLES)]
    max_samples: u64,

    /// Pause after each batch, in milliseconds
    #[arg(long, default_value_t = 1)]
    pause_ms: u64,

    /// Cycle the simulated chip through its DVFS modes
    #[arg(long)]
    dvfs: bool,

    /// Batches between two DVFS mode switches
    #[arg(long, default_value_t = DVFS_SWITCH_BATCHES)]
    dvfs_switch_batches: u64,

    /// Log host CPU and memory before starting
    #[arg(long)]
    host_info: bool,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }

        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            batch_size: self.batch_size,
            burst_size: self.burst_size,
            burst_interval: self.burst_interval,
            rate_interval: self.rate_interval,
            max_samples: self.max_samples,
            pause: Duration::from_millis(self.pause_ms),
            dvfs_switch_batches: self.dvfs.then_some(self.dvfs_switch_batches),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Status lines own stdout, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    if args.host_info {
        log_host_info(&gather_host_info());
    }

    let stdout = io::stdout();
    let result = HeartMonitor::new(args.monitor_config(), stdout.lock(), ThreadSleepPacer)
        .and_then(HeartMonitor::run);

    match result {
        Ok(summary) => {
            info!(
                samples = summary.samples,
                processing_cycles = summary.processing_cycles,
                rate_reports = summary.rate_reports,
                batches = summary.batches,
                dvfs_transitions = summary.dvfs_transitions,
                elapsed = ?summary.elapsed,
                "heart monitor finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
