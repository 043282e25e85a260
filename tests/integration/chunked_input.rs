//! Integration tests for reads that split lines and characters.

use assert_cmd::Command;

const SESSION: &str = "--- Terminal on /dev/ttyUSB0 | 115200 8-N-1\n\
    [120][INFO ][main.cpp:45][setup] temp=21\u{00B0}C\n\
    [121] [WARN ] [wifi.cpp:88][connect] signal \u{2582}\u{2584}\u{2586}\r\n\
    [FOO] custom level\n\
    plain \u{1F600} text\n\
    [122][ERROR][main.cpp:99][loop] no newline at end";

#[allow(deprecated)]
fn espcolor() -> Command {
    let mut cmd = Command::cargo_bin("espcolor").unwrap();
    cmd.env_remove("FORCE_COLOR");
    cmd
}

fn run_with_chunk_size(chunk_size: usize) -> Vec<u8> {
    espcolor()
        .arg("--color=always")
        .arg(format!("--chunk-size={chunk_size}"))
        .write_stdin(SESSION)
        .output()
        .unwrap()
        .stdout
}

#[test]
fn chunk_size_does_not_change_output() {
    let reference = run_with_chunk_size(4096);
    assert!(!reference.is_empty());

    for chunk_size in [1, 2, 3, 5, 7, 64] {
        assert_eq!(
            run_with_chunk_size(chunk_size),
            reference,
            "chunk size {chunk_size} changed output"
        );
    }
}

#[test]
fn byte_at_a_time_keeps_multibyte_characters() {
    let stdout = String::from_utf8(run_with_chunk_size(1)).unwrap();
    assert!(stdout.contains("temp=21\u{00B0}C"));
    assert!(stdout.contains("\u{2582}\u{2584}\u{2586}"));
    assert!(stdout.contains("plain \u{1F600} text\n"));
    assert!(!stdout.contains('\u{FFFD}'));
}

#[test]
fn final_partial_line_emitted_once() {
    let stdout = String::from_utf8(run_with_chunk_size(3)).unwrap();
    assert_eq!(stdout.matches("no newline at end").count(), 1);
    assert!(stdout.ends_with("no newline at end\x1b[0m"));
}
