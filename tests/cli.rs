use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn polar_checks_stored_truth_values() {
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args(["--cases", "configs/cases", "--check-truth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== two_wing ==="))
        .stdout(predicate::str::contains("=== solar_uav ==="));
}

#[test]
fn polar_fails_when_truth_is_stale() {
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args([
            "--cases",
            "configs/scenarios.yaml",
            "--name",
            "stale_truth",
            "--check-truth",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("truth check failed for: stale_truth"));
}

#[test]
fn polar_rejects_shape_mismatch() {
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args(["--cases", "configs/scenarios.yaml", "--name", "short_curve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shape mismatch"));
}

#[test]
fn polar_csv_feeds_the_plotter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("uav.csv");
    let png_path = dir.path().join("plots/uav.png");

    Command::cargo_bin("polar")
        .expect("polar bin")
        .args([
            "--cases",
            "configs/cases",
            "--name",
            "solar_uav",
            "--output",
            csv_path.to_str().unwrap(),
            "--summary",
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("csv");
    assert_eq!(csv.lines().count(), 11);
    assert!(dir.path().join("uav_summary.json").exists());

    Command::cargo_bin("polar_plot")
        .expect("polar_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn noise_sum_combines_airframe_and_engine() {
    Command::cargo_bin("noise_sum")
        .expect("noise_sum bin")
        .args(["--airframe", "90", "--engine", "90"])
        .assert()
        .success()
        .stdout("93.010\n");

    Command::cargo_bin("noise_sum")
        .expect("noise_sum bin")
        .args(["--airframe", "90", "--engine", "90", "--no-engine"])
        .assert()
        .success()
        .stdout("90.000\n");

    Command::cargo_bin("noise_sum")
        .expect("noise_sum bin")
        .args(["--levels", "70,70"])
        .assert()
        .success()
        .stdout("73.010\n");
}

#[test]
fn summary_to_stdout_is_refused_before_any_output() {
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args([
            "--cases",
            "configs/cases",
            "--name",
            "two_wing",
            "--output",
            "-",
            "--summary",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--summary needs a file --output"));
}

#[test]
fn summary_without_output_is_a_usage_error() {
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args(["--cases", "configs/cases", "--name", "two_wing", "--summary"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn failing_case_prints_nothing_for_earlier_cases() {
    // short_curve is first in the file and fails; the rest must not be printed.
    Command::cargo_bin("polar")
        .expect("polar bin")
        .args(["--cases", "configs/scenarios.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
