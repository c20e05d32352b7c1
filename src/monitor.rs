use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::config::MonitorConfig;
use crate::dvfs::DvfsGovernor;
use crate::error::Result;
use crate::pacing::Pacer;
use crate::report::{heart_rate_for, StatusLine};
use crate::workload;

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: u64,
    pub processing_cycles: u64,
    pub rate_reports: u64,
    /// Batches completed in full. The batch in which the run ends is not counted.
    pub batches: u64,
    pub pauses: u64,
    pub dvfs_transitions: u64,
    pub elapsed: Duration,
}

/// The simulated load generator.
///
/// Acquires samples in batches, runs a DSP burst every `burst_interval`
/// samples, reports a heart rate every `rate_interval` samples and pauses
/// after each batch. Status lines go to `out`; everything else is logged.
pub struct HeartMonitor<W, P> {
    config: MonitorConfig,
    out: W,
    pacer: P,
    governor: Option<DvfsGovernor>,
    sample_count: u64,
    processing_cycles: u64,
    rate_reports: u64,
    batches: u64,
    pauses: u64,
    filtered: u64,
}

impl<W: Write, P: Pacer> HeartMonitor<W, P> {
    pub fn new(config: MonitorConfig, out: W, pacer: P) -> Result<Self> {
        config.validate()?;

        let governor = config.dvfs_switch_batches.map(DvfsGovernor::new);

        Ok(Self {
            config,
            out,
            pacer,
            governor,
            sample_count: 0,
            processing_cycles: 0,
            rate_reports: 0,
            batches: 0,
            pauses: 0,
            filtered: 0,
        })
    }

    /// Runs until the sample budget is exceeded.
    pub fn run(mut self) -> Result<RunSummary> {
        let start = Instant::now();

        info!(
            batch_size = self.config.batch_size,
            burst_size = self.config.burst_size,
            burst_interval = self.config.burst_interval,
            rate_interval = self.config.rate_interval,
            max_samples = self.config.max_samples,
            pause = ?self.config.pause,
            dvfs = self.governor.is_some(),
            "heart monitor starting"
        );
        self.emit(StatusLine::Startup)?;

        loop {
            for _ in 0..self.config.batch_size {
                if self.acquire()? {
                    return Ok(self.summary(start.elapsed()));
                }
            }

            self.batches += 1;
            trace!(batch = self.batches, samples = self.sample_count, "batch done, pausing");
            self.pacer.pause(self.config.pause);
            self.pauses += 1;

            if let Some(governor) = self.governor.as_mut() {
                governor.on_batch_complete(self.batches);
            }
        }
    }

    /// Acquires one sample. Returns `true` once the run is complete.
    fn acquire(&mut self) -> Result<bool> {
        self.sample_count += 1;
        self.filtered = workload::acquire_sample(self.sample_count);

        if self.sample_count % self.config.burst_interval == 0 {
            workload::dsp_burst(self.filtered, self.config.burst_size);
            self.processing_cycles += 1;
            debug!(cycle = self.processing_cycles, samples = self.sample_count, "DSP burst");

            self.emit(StatusLine::Burst {
                cycle: self.processing_cycles,
                samples: self.sample_count,
            })?;
        }

        if self.sample_count % self.config.rate_interval == 0 {
            let bpm = heart_rate_for(self.sample_count);
            self.rate_reports += 1;
            debug!(bpm, samples = self.sample_count, "rate report");

            self.emit(StatusLine::HeartRate {
                bpm,
                samples: self.sample_count,
            })?;
        }

        if self.sample_count > self.config.max_samples {
            self.emit(StatusLine::Complete)?;
            self.out.flush()?;
            return Ok(true);
        }

        Ok(false)
    }

    fn emit(&mut self, line: StatusLine) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn summary(&self, elapsed: Duration) -> RunSummary {
        RunSummary {
            samples: self.sample_count,
            processing_cycles: self.processing_cycles,
            rate_reports: self.rate_reports,
            batches: self.batches,
            pauses: self.pauses,
            dvfs_transitions: self
                .governor
                .as_ref()
                .map_or(0, DvfsGovernor::transitions),
            elapsed,
        }
    }
}
