use std::hint::black_box;
use std::io;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use heart_monitor_sim::workload::{acquire_sample, dsp_burst};
use heart_monitor_sim::{HeartMonitor, MonitorConfig, NoPacer};

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload");

    group.bench_function("acquire_sample", |b| {
        let mut sample = 0u64;
        b.iter(|| {
            sample += 1;
            acquire_sample(black_box(sample))
        });
    });

    group.bench_function("dsp_burst", |b| {
        b.iter(|| dsp_burst(black_box(1_023), black_box(5_000)));
    });

    group.finish();

    let mut group = c.benchmark_group("monitor");
    group.sample_size(10);

    group.bench_function("stock_run_unpaced", |b| {
        b.iter(|| {
            HeartMonitor::new(MonitorConfig::default(), io::sink(), NoPacer)
                .and_then(HeartMonitor::run)
                .map(|summary| summary.samples)
        });
    });

    group.bench_function("short_run_paced", |b| {
        let config = MonitorConfig {
            max_samples: 10_000,
            pause: Duration::from_micros(50),
            ..MonitorConfig::default()
        };
        b.iter(|| {
            HeartMonitor::new(config.clone(), io::sink(), heart_monitor_sim::ThreadSleepPacer)
                .and_then(HeartMonitor::run)
                .map(|summary| summary.pauses)
        });
    });

    group.finish();
}

criterion_group!(benches, entrypoint);
criterion_main!(benches);
