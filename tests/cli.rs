use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_heart-monitor-sim");

#[test]
fn default_run_exits_cleanly() {
    let output = Command::new(BIN).output().unwrap();

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 112);
    assert_eq!(lines[0], "Heart Monitor Starting...");
    assert_eq!(lines[1], "ECG Processing Cycle 1 - Samples: 10000");
    assert_eq!(lines[111], "Heart Monitor Simulation Complete");
}

#[test]
fn overrides_shrink_the_run() {
    let output = Command::new(BIN)
        .args([
            "--batch-size",
            "10",
            "--burst-interval",
            "25",
            "--rate-interval",
            "50",
            "--max-samples",
            "100",
            "--pause-ms",
            "0",
            "--dvfs",
            "--dvfs-switch-batches",
            "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("Heart Rate: 65 BPM - Total Samples: 100\n"));
}

#[test]
fn zero_interval_fails() {
    let output = Command::new(BIN)
        .args(["--rate-interval", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("rate_interval"));
}
