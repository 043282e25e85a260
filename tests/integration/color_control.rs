//! Integration tests for color control: `NO_COLOR`, `FORCE_COLOR`, --color flag, `TERM`.

use assert_cmd::Command;

const LINE: &str = "[123][INFO ][main.cpp:45][loop] hello\n";

#[allow(deprecated)]
fn espcolor() -> Command {
    let mut cmd = Command::cargo_bin("espcolor").unwrap();
    cmd.env_remove("FORCE_COLOR").env_remove("NO_COLOR");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.write_stdin(LINE).output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn color_never_disables_ansi() {
    let stdout = stdout_of(espcolor().arg("--color=never"));
    assert_eq!(stdout, "[123][INFO][main.cpp:45][loop] hello\n");
}

#[test]
fn color_always_enables_ansi() {
    let stdout = stdout_of(espcolor().arg("--color=always"));
    assert!(
        stdout.contains("\x1b["),
        "Should contain ANSI escapes with --color=always"
    );
}

#[test]
fn color_always_overrides_no_color() {
    let stdout = stdout_of(espcolor().arg("--color=always").env("NO_COLOR", "1"));
    assert!(
        stdout.contains("\x1b["),
        "--color=always should override NO_COLOR"
    );
}

#[test]
fn piped_stdout_disables_colors_by_default() {
    let stdout = stdout_of(&mut espcolor());
    // When piped (not a TTY), auto mode should disable colors
    assert!(
        !stdout.contains("\x1b["),
        "Piped output should not have ANSI escapes in auto mode"
    );
}

#[test]
fn term_dumb_disables_colors() {
    let stdout = stdout_of(espcolor().env("TERM", "dumb"));
    assert!(
        !stdout.contains("\x1b["),
        "TERM=dumb should disable colors in auto mode"
    );
}

#[test]
fn force_color_enables_colors_when_piped() {
    let stdout = stdout_of(espcolor().env("FORCE_COLOR", "1"));
    assert!(
        stdout.contains("\x1b["),
        "FORCE_COLOR should enable colors in auto mode"
    );
}

#[test]
fn color_never_overrides_force_color() {
    let stdout = stdout_of(espcolor().arg("--color=never").env("FORCE_COLOR", "1"));
    assert!(
        !stdout.contains("\x1b["),
        "--color=never should override FORCE_COLOR"
    );
}
