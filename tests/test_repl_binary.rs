//! `calcrepl` 바이너리를 파이프 입력으로 구동하는 종단 간 테스트.
//!
//! HOME/XDG 경로와 작업 디렉터리를 임시 디렉터리로 바꿔 사용자 설정과 격리한다.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn calc_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("calcrepl").expect("calcrepl binary should build");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CALCREPL_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("ENV_NAME");
    cmd
}

#[test]
fn unknown_menu_exit_session() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    calc_cmd(tmpdir.path())
        .write_stdin("bogus\nmenu\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to the Interactive Calculator. Type 'exit' to exit.",
        ))
        .stdout(predicate::str::contains(
            "Unknown command. Type 'menu' to see available commands, or 'exit' to quit.",
        ))
        .stdout(predicate::str::contains(
            "Available commands: add, divide, menu, multiply, subtract",
        ))
        .stdout(predicate::str::contains("Exiting the interactive calculator..."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn divide_by_zero_then_exit() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    calc_cmd(tmpdir.path())
        .write_stdin("divide 5 0\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Cannot divide by zero."))
        .stdout(predicate::str::contains("Exiting the interactive calculator..."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn arithmetic_results_are_printed() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    calc_cmd(tmpdir.path())
        .write_stdin("add 3 4\nSUBTRACT 9 4\nmultiply 3 4\ndivide 20 4\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0 + 4.0 = 7.0"))
        .stdout(predicate::str::contains("9.0 - 4.0 = 5.0"))
        .stdout(predicate::str::contains("3.0 * 4.0 = 12.0"))
        .stdout(predicate::str::contains("20.0 / 4.0 = 5.0"));
}

#[test]
fn closed_stdin_terminates_normally() {
    let tmpdir = tempfile::tempdir().expect("temp dir");

    calc_cmd(tmpdir.path())
        .write_stdin("add 1 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0 + 2.0 = 3.0"))
        .stdout(predicate::str::contains("Exiting the interactive calculator..."));
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let tmpdir = tempfile::tempdir().expect("temp dir");
    let config_dir = tmpdir.path().join(".calcrepl");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(config_dir.join("config.json"), "{ broken").expect("write config");

    calc_cmd(tmpdir.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting the interactive calculator..."))
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn log_level_from_config_enables_startup_log() {
    let tmpdir = tempfile::tempdir().expect("temp dir");
    let config_path = tmpdir.path().join("calc.json");
    fs::write(
        &config_path,
        r#"{"defaults": {"env_name": "ci", "log_level": "info"}}"#,
    )
    .expect("write config");

    calc_cmd(tmpdir.path())
        .env("CALCREPL_CONFIG", &config_path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting Calculator REPL"))
        .stderr(predicate::str::contains("ci"))
        .stdout(predicate::str::contains("Starting Calculator REPL").not());
}

#[test]
fn dotenv_file_supplies_env_name_and_log_level() {
    let tmpdir = tempfile::tempdir().expect("temp dir");
    fs::write(
        tmpdir.path().join(".env"),
        "ENV_NAME=from-dotenv\nLOG_LEVEL=info\n",
    )
    .expect("write .env");

    calc_cmd(tmpdir.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting Calculator REPL"))
        .stderr(predicate::str::contains("from-dotenv"));
}

#[test]
fn process_env_wins_over_dotenv_file() {
    let tmpdir = tempfile::tempdir().expect("temp dir");
    fs::write(tmpdir.path().join(".env"), "LOG_LEVEL=info\n").expect("write .env");

    calc_cmd(tmpdir.path())
        .env("LOG_LEVEL", "warn")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
