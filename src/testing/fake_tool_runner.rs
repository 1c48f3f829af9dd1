use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ToolRunnerPort;

pub struct FakeToolRunner {
    /// Result returned by every `probe`.
    pub probe_result: Mutex<bool>,
    /// Programs whose `execute` exits non-zero.
    pub failing: Mutex<Vec<String>>,
    /// File written when `fakeroot` runs, standing in for the built package.
    pub produces: Mutex<Option<PathBuf>>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self {
            probe_result: Mutex::new(true),
            failing: Mutex::new(Vec::new()),
            produces: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_probe_result(self, installed: bool) -> Self {
        *self.probe_result.lock().unwrap() = installed;
        self
    }

    pub fn failing_on(self, program: &str) -> Self {
        self.failing.lock().unwrap().push(program.to_string());
        self
    }

    pub fn producing(self, artifact: PathBuf) -> Self {
        *self.produces.lock().unwrap() = Some(artifact);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolRunnerPort for FakeToolRunner {
    fn probe(&self, program: &str, args: &[&str]) -> Result<bool, AppError> {
        self.calls.lock().unwrap().push(format!("probe {} {}", program, args.join(" ")));
        Ok(*self.probe_result.lock().unwrap())
    }

    fn execute(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), AppError> {
        let location = cwd.map(|dir| format!(" @ {}", dir.display())).unwrap_or_default();
        self.calls.lock().unwrap().push(format!("run {} {}{}", program, args.join(" "), location));

        if self.failing.lock().unwrap().iter().any(|p| p == program) {
            return Err(AppError::tool_failure(program, "exit status: 1"));
        }
        if program == "fakeroot"
            && let Some(artifact) = self.produces.lock().unwrap().as_ref()
        {
            fs::write(artifact, b"deb")?;
        }
        Ok(())
    }
}
