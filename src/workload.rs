use std::hint::black_box;

/// Simulated acquisition and filtering of one ECG sample.
///
/// Returns the "filtered" value, which only feeds the next DSP burst. Nothing
/// here is observable; `black_box` keeps the optimizer from removing it.
pub fn acquire_sample(sample_count: u64) -> u64 {
    let signal_value = black_box(sample_count.wrapping_mul(47) % 1024);
    black_box(signal_value + (signal_value >> 2))
}

/// High-intensity DSP processing (FFT stand-in): `iterations` discarded
/// modular multiplications seeded by the last filtered value.
pub fn dsp_burst(filtered: u64, iterations: u64) {
    let acc = (0..iterations).fold(0u64, |acc, j| {
        acc.wrapping_add(black_box(j.wrapping_mul(filtered) % 2048))
    });
    black_box(acc);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_value_stays_in_signal_range() {
        for sample in [0, 1, 21, 1_000, 10_000, 1_000_001, u64::MAX] {
            let filtered = acquire_sample(sample);
            // signal < 1024, so signal + signal / 4 < 1280.
            assert!(filtered < 1280, "sample {sample} filtered to {filtered}");
        }
    }

    #[test]
    fn acquisition_is_deterministic() {
        assert_eq!(acquire_sample(10_000), acquire_sample(10_000));
        // 1 * 47 = 47, 47 + 11 = 58
        assert_eq!(acquire_sample(1), 58);
    }

    #[test]
    fn empty_burst_is_fine() {
        dsp_burst(58, 0);
        dsp_burst(u64::MAX, 5_000);
    }
}
