//! End-to-end tests for the `finrate` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn finrate() -> Command {
    Command::cargo_bin("finrate").unwrap()
}

#[test]
fn amortize_summary() {
    finrate()
        .args(["amortize", "-p", "200000", "-s", "0.0375:360", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-926.23"))
        .stdout(predicate::str::contains("133443.53"));
}

#[test]
fn amortize_schedule_as_csv() {
    finrate()
        .args(["amortize", "-p", "1000", "-s", "0:3", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("period,principal,rate,payment,interest,balance"))
        .stdout(predicate::str::contains("-333.34"));
}

#[test]
fn amortize_rejects_bad_segment() {
    finrate()
        .args(["amortize", "-p", "1000", "-s", "0.05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RATE:MONTHS"));
}

#[test]
fn irr_of_negative_first_flow() {
    finrate()
        .args(["irr", "-4000", "1200", "1410", "1875", "1050"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14.2993%"));
}

#[test]
fn irr_without_sign_change_fails() {
    finrate()
        .args(["irr", "10", "20", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive and one negative"))
        .stderr(predicate::str::contains("try --guess").not());
}

#[test]
fn xirr_without_sign_change_has_no_guess_hint() {
    finrate()
        .args(["xirr", "2020-01-01:10", "2021-01-01:20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try --guess").not());
}

#[test]
fn unconverged_irr_suggests_a_guess() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "max_iterations = 1").unwrap();

    finrate()
        .arg("--config")
        .arg(config.path())
        .args(["irr", "-4000", "1200", "1410", "1875", "1050"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try --guess 0.1"))
        .stderr(predicate::str::contains("does not converge"));

    finrate()
        .arg("--config")
        .arg(config.path())
        .args(["--guess", "0.2", "irr", "-4000", "1200", "1410", "1875", "1050"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try --guess").not());
}

#[test]
fn npv_as_json() {
    finrate()
        .args(["npv", "--rate", "0.1", "-100", "60", "60", "60", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"NPV\": \"49.2111\""));
}

#[test]
fn xirr_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,amount").unwrap();
    writeln!(file, "1985-01-01,-1000").unwrap();
    writeln!(file, "1990-01-01,600").unwrap();
    writeln!(file, "1995-01-01,600").unwrap();

    finrate()
        .args(["xirr", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2.4851%"));
}

#[test]
fn config_file_sets_guess() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "initial_guess = 0.1").unwrap();
    writeln!(config, "max_iterations = 50").unwrap();

    finrate()
        .arg("--config")
        .arg(config.path())
        .args(["xirr", "1985-01-01:-1000", "1990-01-01:600", "1995-01-01:600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.4851%"));
}

#[test]
fn eir_with_annual_fee() {
    finrate()
        .args(["eir", "-p", "200000", "-r", "0.075", "--fee", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1411.01"))
        .stdout(predicate::str::contains("7.59"));
}

#[test]
fn rate_conversion() {
    finrate()
        .args(["rate", "0.0375", "--kind", "apr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.7500%"));
}
