//! Assertions over configlake process output.

use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert exit code 0, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "configlake exited with {:?}:\n{}",
        output.status.code(),
        stderr(output)
    );
}

/// Assert the command failed for any reason.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected configlake to fail, stdout: {}",
        stdout(output)
    );
}

/// Assert the binary reported an error: exit code 1 and a `✗` line on
/// stderr containing `expected`.
pub fn assert_error(output: &Output, expected: &str) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit code 1, stderr: {}",
        stderr(output)
    );
    let err = stderr(output);
    assert!(
        err.lines()
            .any(|line| line.starts_with("✗ ") && line.contains(expected)),
        "no '✗ ...{}' line on stderr, got: {}",
        expected,
        err
    );
}

/// Assert a `→` hint line on stderr containing `expected`.
pub fn assert_hint(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.lines()
            .any(|line| line.starts_with("→ ") && line.contains(expected)),
        "no '→ ...{}' hint on stderr, got: {}",
        expected,
        err
    );
}

/// Assert a table row shows `key` with its value hidden.
pub fn assert_masked(output: &Output, key: &str, value: &str) {
    let out = stdout(output);
    let row = out
        .lines()
        .find(|line| line.trim_start().starts_with(key))
        .unwrap_or_else(|| panic!("no row for '{}' in: {}", key, out));
    assert!(
        !row.contains(value),
        "row for '{}' leaks its value: {}",
        key,
        row
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}
