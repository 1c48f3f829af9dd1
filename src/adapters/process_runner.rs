use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ToolRunnerPort;

/// Runs external tools as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

fn describe(program: &str, args: &[&str]) -> String {
    if args.is_empty() { program.to_string() } else { format!("{} {}", program, args.join(" ")) }
}

impl ToolRunnerPort for ProcessToolRunner {
    fn probe(&self, program: &str, args: &[&str]) -> Result<bool, AppError> {
        log::debug!("Probing `{}`", describe(program, args));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::tool_failure(program, format!("failed to start: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("`{}` exited with {}: {}", program, output.status, stderr.trim());
        }
        Ok(output.status.success())
    }

    fn execute(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), AppError> {
        let command_line = describe(program, args);
        log::info!("Running `{}`", command_line);

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|e| AppError::tool_failure(program, format!("failed to start: {}", e)))?;

        if !status.success() {
            return Err(AppError::tool_failure(
                program,
                format!("`{}` exited with {}", command_line, status),
            ));
        }
        Ok(())
    }
}
