#![cfg(unix)]

use std::process::{Command, Output};

fn goldcheck(expected: &std::path::Path, script: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldcheck"))
        .arg(expected)
        .args(["--program", "/bin/sh", "--", "-c", script])
        .output()
        .unwrap()
}

#[test]
fn test_run_hello_matches() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("hello.out");
    std::fs::write(&expected, "Hello World\n").unwrap();

    let output = goldcheck(&expected, "echo 'Hello World'");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"\nEverything ok\n");
}

#[test]
fn test_run_hello_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("goodbye.out");
    std::fs::write(&expected, "Goodbye\n").unwrap();

    let output = goldcheck(&expected, "echo 'Hello World'");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "--- expected\n+++ result\n@@ -1 +1 @@\n-Goodbye\n+Hello World\n\nSomething is differnet :{\n"
    );
}

#[test]
fn test_run_ignores_stderr_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("hello.out");
    std::fs::write(&expected, "Hello World\n").unwrap();

    let output = goldcheck(&expected, "echo 'Hello World'; echo oops >&2; exit 7");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"\nEverything ok\n");
}
