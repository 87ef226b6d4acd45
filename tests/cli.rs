use assert_cmd::Command;
use predicates::prelude::*;

fn breathe(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breathe").unwrap();
    cmd.env("HOME", home.path()).env_remove("BREATHE_SERVER");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    breathe(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timings"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn clear_refuses_without_force() {
    let home = tempfile::tempdir().unwrap();
    breathe(&home)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn unreachable_store_reports_unavailable() {
    let home = tempfile::tempdir().unwrap();
    breathe(&home)
        .args(["--server", "http://127.0.0.1:9", "timings", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable"));
}

#[test]
fn add_rejects_unknown_phase_before_contacting_store() {
    let home = tempfile::tempdir().unwrap();
    breathe(&home)
        .args(["--server", "http://127.0.0.1:9", "timings", "add", "sigh", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable").not());
}

#[test]
fn completions_generate_for_bash() {
    let home = tempfile::tempdir().unwrap();
    breathe(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breathe"));
}

#[test]
fn bad_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".breathe");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "general: [not, a, map]\n").unwrap();

    breathe(&home).args(["completions", "zsh"]).assert().success();
}
