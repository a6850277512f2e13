use crate::runner::{Captured, CommandSpec, LaunchError, ProcessRunner};
use std::io;
use std::sync::{Arc, Mutex};

/// A `ProcessRunner` that never spawns anything.
#[derive(Debug, Clone)]
pub struct FakeRunner {
    pub stdout: Vec<u8>,
    pub launchable: bool,
    pub launched: Arc<Mutex<Vec<CommandSpec>>>,
}

impl FakeRunner {
    pub fn new(stdout: &str) -> Self {
        Self::from_bytes(stdout.as_bytes())
    }

    pub fn from_bytes(stdout: &[u8]) -> Self {
        Self {
            stdout: stdout.to_vec(),
            launchable: true,
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unlaunchable() -> Self {
        Self {
            launchable: false,
            ..Self::new("")
        }
    }

    pub fn launch_count(&self) -> usize {
        self.launched.lock().unwrap().len()
    }
}

impl ProcessRunner for FakeRunner {
    fn run_and_capture(&self, command: &CommandSpec) -> Result<Captured, LaunchError> {
        self.launched.lock().unwrap().push(command.clone());
        if !self.launchable {
            return Err(LaunchError {
                program: command.program.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        Ok(Captured {
            stdout: self.stdout.clone(),
            status: Some(0),
        })
    }
}

/// Applies a diff produced by [`crate::diff::unified_diff`] to `original`.
///
/// Only understands that exact output format; panics on anything else.
pub fn apply_unified_diff(original: &str, diff: &str) -> String {
    let old: Vec<&str> = original.split_inclusive('\n').collect();
    let mut out = String::new();
    let mut cursor = 0;
    let mut last_tag = ' ';
    // The first two lines are the `---`/`+++` headers.
    for line in diff.split_inclusive('\n').skip(2) {
        if let Some(header) = line.strip_prefix("@@ -") {
            let range = header.split(' ').next().unwrap();
            let mut parts = range.split(',');
            let start: usize = parts.next().unwrap().parse().unwrap();
            let len: usize = parts.next().map_or(1, |len| len.parse().unwrap());
            let hunk_start = if len == 0 { start } else { start - 1 };
            out.extend(old[cursor..hunk_start].iter().copied());
            cursor = hunk_start;
            continue;
        }
        let (tag, content) = line.split_at(1);
        match tag {
            " " => {
                out.push_str(content);
                cursor += 1;
            }
            "-" => cursor += 1,
            "+" => out.push_str(content),
            "\\" => {
                if last_tag != '-' && out.ends_with('\n') {
                    out.pop();
                }
            }
            _ => panic!("unexpected diff line: {:?}", line),
        }
        last_tag = tag.chars().next().unwrap();
    }
    out.extend(old[cursor..].iter().copied());
    out
}

#[test]
fn test_apply_unified_diff() {
    use crate::diff::unified_diff;

    let cases = [
        ("", ""),
        ("a\n", ""),
        ("", "a\n"),
        ("Goodbye\n", "Hello World\n"),
        ("x\n", "x"),
        ("x", "x\n"),
        ("x", "y"),
        ("1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n", "0\n1\n2\n3\n4\n6\n7\n8\n9\nten\n"),
        ("k\nk\nk\nk\nk\nk\nk\nk\nlast", "k\nk\nk\nk\nk\nk\nk\nk\nlast\n"),
    ];
    for (expected, actual) in cases {
        let diff = unified_diff(expected, actual);
        assert_eq!(apply_unified_diff(expected, &diff), actual, "diff:\n{}", diff);
    }
}
