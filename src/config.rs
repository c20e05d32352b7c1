use std::time::Duration;

use crate::error::{Error, Result};

/// Samples acquired between two pauses.
pub const BATCH_SIZE: u64 = 1_000;
/// Discarded operations performed by one DSP burst.
pub const BURST_SIZE: u64 = 5_000;
/// A DSP burst (and its status line) happens every this many samples.
pub const BURST_INTERVAL: u64 = 10_000;
/// A heart rate line is printed every this many samples.
pub const RATE_INTERVAL: u64 = 100_000;
/// The run completes on the first sample past this count.
pub const MAX_SAMPLES: u64 = 1_000_000;
/// Length of the pause after each batch.
pub const PAUSE: Duration = Duration::from_millis(1);
/// Batches between two DVFS mode switches.
pub const DVFS_SWITCH_BATCHES: u64 = 250;

/// Tunables of a monitor run. `Default` reproduces the stock simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub batch_size: u64,
    pub burst_size: u64,
    pub burst_interval: u64,
    pub rate_interval: u64,
    pub max_samples: u64,
    pub pause: Duration,
    /// `None` disables the DVFS governor.
    pub dvfs_switch_batches: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            burst_size: BURST_SIZE,
            burst_interval: BURST_INTERVAL,
            rate_interval: RATE_INTERVAL,
            max_samples: MAX_SAMPLES,
            pause: PAUSE,
            dvfs_switch_batches: None,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<()> {
        non_zero("batch_size", self.batch_size)?;
        non_zero("burst_interval", self.burst_interval)?;
        non_zero("rate_interval", self.rate_interval)?;

        if let Some(batches) = self.dvfs_switch_batches {
            non_zero("dvfs_switch_batches", batches)?;
        }

        Ok(())
    }
}

fn non_zero(field: &'static str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidConfig {
            field,
            value,
            problem: "must be greater than zero",
        });
    }

    Ok(())
}
