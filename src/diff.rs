use similar::TextDiff;

pub const CONTEXT_LINES: usize = 3;

/// Line-oriented unified diff turning `expected` into `actual`.
///
/// Headers are labelled `expected` and `result`. Equal inputs produce an empty string.
/// A last line without a terminator is followed by `\ No newline at end of file`
/// so every diff line stays newline-terminated.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header("expected", "result")
        .to_string()
}
