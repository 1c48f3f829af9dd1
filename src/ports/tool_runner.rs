use std::path::Path;

use crate::domain::AppError;

/// Runs external programs such as `dpkg-query` and `dpkg-buildpackage`.
pub trait ToolRunnerPort {
    /// Run quietly with captured output and report whether it exited successfully.
    ///
    /// Fails only when the program cannot be started.
    fn probe(&self, program: &str, args: &[&str]) -> Result<bool, AppError>;

    /// Run with inherited stdio, failing on a non-zero exit status.
    fn execute(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), AppError>;
}
