//! Heart monitor load simulator.
//!
//! Busy-loops over synthetic "ECG" arithmetic in paced batches and prints a
//! small line protocol of status messages, in the manner of a stress tool.

pub mod config;
pub mod dvfs;
mod error;
pub mod host;
pub mod monitor;
pub mod pacing;
pub mod report;
pub mod workload;

pub use config::MonitorConfig;
pub use error::{Error, Result};
pub use monitor::{HeartMonitor, RunSummary};
pub use pacing::{NoPacer, Pacer, ThreadSleepPacer};
