use std::fmt;

/// Base heart rate in BPM that the displayed value varies around.
pub const BASE_HEART_RATE: i64 = 75;
const RATE_SPREAD: u64 = 20;
const RATE_OFFSET: i64 = 10;

/// Displayed heart rate for the given sample count, always in `65..=84`.
pub fn heart_rate_for(sample_count: u64) -> i64 {
    BASE_HEART_RATE + (sample_count % RATE_SPREAD) as i64 - RATE_OFFSET
}

/// One line of the monitor's stdout protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Startup,
    Burst { cycle: u64, samples: u64 },
    HeartRate { bpm: i64, samples: u64 },
    Complete,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Startup => write!(f, "Heart Monitor Starting..."),
            StatusLine::Burst { cycle, samples } => {
                write!(f, "ECG Processing Cycle {cycle} - Samples: {samples}")
            }
            StatusLine::HeartRate { bpm, samples } => {
                write!(f, "Heart Rate: {bpm} BPM - Total Samples: {samples}")
            }
            StatusLine::Complete => write!(f, "Heart Monitor Simulation Complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_rate_range() {
        for sample in 0..1_000u64 {
            let bpm = heart_rate_for(sample);
            assert!((65..=84).contains(&bpm), "sample {sample} gave {bpm}");
        }

        assert_eq!(heart_rate_for(100_000), 65);
        assert_eq!(heart_rate_for(19), 84);
        assert_eq!(heart_rate_for(u64::MAX), 75 + 15 - 10);
    }

    #[test]
    fn line_formats() {
        assert_eq!(StatusLine::Startup.to_string(), "Heart Monitor Starting...");
        assert_eq!(
            StatusLine::Burst {
                cycle: 1,
                samples: 10_000
            }
            .to_string(),
            "ECG Processing Cycle 1 - Samples: 10000"
        );
        assert_eq!(
            StatusLine::HeartRate {
                bpm: 65,
                samples: 100_000
            }
            .to_string(),
            "Heart Rate: 65 BPM - Total Samples: 100000"
        );
        assert_eq!(
            StatusLine::Complete.to_string(),
            "Heart Monitor Simulation Complete"
        );
    }
}
