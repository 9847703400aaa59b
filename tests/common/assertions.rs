//! Custom assertion macros for contract and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that a command's stdout contains the expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "default_access_key");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        assert!(
            $result.stdout.contains($expected),
            "Expected stdout to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the exit status of a command.
///
/// # Example
/// ```ignore
/// assert_exit_code!(result, 1);
/// ```
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit status.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
