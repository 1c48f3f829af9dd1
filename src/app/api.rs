//! API Facade for the application.
//!
//! These functions wire the production adapters into command execution. All
//! inputs are explicit; prompting happens only in the CLI layer.

use std::path::Path;

use chrono::Local;

use crate::adapters::{HttpGitHubClient, ProcessToolRunner};
use crate::app::commands::{build, changelog, workbench};

pub use crate::app::commands::build::{BuildOptions, BuildOutcome};
pub use crate::app::commands::changelog::{ChangelogOptions, ChangelogOutcome};
pub use crate::app::commands::workbench::{WorkbenchOptions, WorkbenchOutcome};
pub use crate::domain::{AppError, GitHubApiConfig, ToolConfig};

/// Load configuration from `path`; see [`crate::app::config::load_config`].
pub fn load_config(path: &Path, required: bool) -> Result<ToolConfig, AppError> {
    crate::app::config::load_config(path, required)
}

/// Build a Debian package with the system's packaging tools.
pub fn build_package(options: &BuildOptions) -> Result<BuildOutcome, AppError> {
    let runner = ProcessToolRunner::new();
    build::execute(&runner, options)
}

/// Draft a changelog entry from GitHub history.
///
/// Requests are anonymous when `token` is `None`.
pub fn draft_changelog(
    options: &ChangelogOptions,
    github: &GitHubApiConfig,
    token: Option<String>,
) -> Result<ChangelogOutcome, AppError> {
    let client = HttpGitHubClient::new(github, token)?;
    changelog::execute(&client, options, Local::now().fixed_offset())
}

/// Generate workbench YAML documents from the plugin datamodel.
pub fn scaffold_workbench(options: &WorkbenchOptions) -> Result<WorkbenchOutcome, AppError> {
    workbench::execute(options)
}
