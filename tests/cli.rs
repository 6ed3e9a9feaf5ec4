use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED: &str = "Eating from individual fruits:
Eating an apple
Eating a banana

Eating from the fruit basket:
Eating an apple
Eating a banana

Eating from the fruit basket:
Eating an apple
";

#[test]
fn demo_prints_reference_run() {
    Command::cargo_bin("composite_pattern")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn demo_succeeds_with_logging_enabled() {
    Command::cargo_bin("composite_pattern")
        .unwrap()
        .env("RUST_LOG", "composite_pattern=debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eating an apple"));
}
