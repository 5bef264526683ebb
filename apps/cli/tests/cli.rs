use assert_cmd::Command;
use example_cli::VERSION;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const CLAMP_LINES: &str = "Clamp: 5\nClamp: 7\nClamp: 3\n";

fn example() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_example"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn expected_stdout(set: &[&str]) -> String {
    let mut out = format!("This project's version is: {VERSION}\n");
    for name in set {
        out.push_str(&format!("Option '{name}' is set\n"));
    }
    out.push_str(CLAMP_LINES);
    out
}

#[test]
fn no_flags_prints_version_and_clamps() {
    example().assert().success().stdout(predicate::str::diff(expected_stdout(&[])));
}

#[test]
fn all_flag_combinations() {
    let names = ["a", "b", "c"];
    for mask in 0u8..8 {
        let set: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, name)| *name)
            .collect();
        let args: Vec<String> = set.iter().map(|name| format!("-{name}")).collect();

        example()
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::diff(expected_stdout(&set)));
    }
}

#[test]
fn long_and_bundled_forms() {
    example()
        .args(["--option-c", "-ba"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_stdout(&["a", "b", "c"])));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    example()
        .arg("-z")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected argument '-z'"));
}

#[test]
fn version_flag_prints_build_version() {
    example()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("example {VERSION}\n")));
}

#[test]
fn help_lists_the_options() {
    example()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Option A").and(predicate::str::contains("--option-c")));
}

#[test]
fn debug_logging_stays_on_stderr() {
    example()
        .arg("-a")
        .env("EXAMPLE__LOG__LEVEL", "debug")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_stdout(&["a"])))
        .stderr(predicate::str::contains("Clamp evaluated"));
}

#[test]
fn default_logging_is_silent() {
    example().assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn disabled_logging_ignores_level() {
    example()
        .env("EXAMPLE__LOG__ENABLED", "false")
        .env("EXAMPLE__LOG__LEVEL", "trace")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_log_level_only_warns() {
    example()
        .env("EXAMPLE__LOG__LEVEL", "shouty")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_stdout(&[])))
        .stderr(predicate::str::contains("'shouty'").and(predicate::str::contains("warning:")));
}

#[test]
fn bad_settings_file_does_not_break_a_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("example.toml"), "[log]\nlevel = \"shouty\"\n")?;

    example()
        .current_dir(dir.path())
        .arg("-a")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_stdout(&["a"])))
        .stderr(predicate::str::contains("using default log settings"));
    Ok(())
}

#[test]
fn malformed_settings_file_keeps_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("example.toml"), "not toml [[[")?;

    example()
        .current_dir(dir.path())
        .arg("-z")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected argument '-z'"));

    example()
        .current_dir(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("example {VERSION}\n")));

    example()
        .current_dir(dir.path())
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_stdout(&["c"])))
        .stderr(predicate::str::contains("using default settings"));
    Ok(())
}
