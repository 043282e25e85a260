//! Integration tests for color theme files.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const LINE: &str = "[1][ERROR][a.c:1][f] boom\n[2][WARN ][a.c:2][g] careful\n";

const THEMES: &str = r#"{
    "theme": "alert",
    "themes": {
        "alert": {
            "log_levels": { "ERROR": "bright_red" },
            "components": { "brackets": "white" }
        },
        "calm": {
            "log_levels": { "ERROR": "blue" }
        }
    }
}"#;

#[allow(deprecated)]
fn espcolor(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("espcolor").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--color=always");
    cmd
}

fn write_default_theme(dir: &Path, content: &str) {
    let platformio = dir.join(".platformio");
    std::fs::create_dir_all(&platformio).unwrap();
    std::fs::write(platformio.join("monitor_colors.json"), content).unwrap();
}

#[test]
fn no_theme_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    espcolor(dir.path())
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mboom\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[33mcareful\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[90m["));
}

#[test]
fn default_location_theme_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    write_default_theme(dir.path(), THEMES);

    espcolor(dir.path())
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[91mboom\x1b[0m"))
        // Partial override: WARN keeps its default
        .stdout(predicate::str::contains("\x1b[33mcareful\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[37m["));
}

#[test]
fn theme_flag_selects_other_theme() {
    let dir = tempfile::tempdir().unwrap();
    write_default_theme(dir.path(), THEMES);

    espcolor(dir.path())
        .arg("--theme=calm")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[34mboom\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[90m["));
}

#[test]
fn explicit_toml_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.toml");
    std::fs::write(
        &path,
        r#"
theme = "raw"

[themes.raw.log_levels]
WARN = "\u001b[38;5;208m"
"#,
    )
    .unwrap();

    espcolor(dir.path())
        .arg("--config")
        .arg(&path)
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;208mcareful\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[31mboom\x1b[0m"));
}

#[test]
fn malformed_theme_file_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    write_default_theme(dir.path(), "{ \"theme\": ");

    espcolor(dir.path())
        .arg("--verbose")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mboom\x1b[0m"))
        .stderr(predicate::str::contains("invalid JSON config"));
}

#[test]
fn unknown_theme_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    write_default_theme(dir.path(), THEMES);

    espcolor(dir.path())
        .arg("--theme=neon")
        .arg("--verbose")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mboom\x1b[0m"))
        .stderr(predicate::str::contains("theme 'neon' is not defined"));
}

#[test]
fn theme_fallback_is_silent_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_default_theme(dir.path(), "{ \"theme\": ");

    espcolor(dir.path())
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mboom\x1b[0m"))
        .stderr("");
}
