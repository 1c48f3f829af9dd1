//! Workbench command implementation.

use std::path::PathBuf;

use crate::app::api::{WorkbenchOptions, WorkbenchOutcome};
use crate::domain::AppError;

pub fn run_workbench(
    plugin: Option<String>,
    file_type: Option<String>,
    root: PathBuf,
) -> Result<(), AppError> {
    let plugin = super::value_or_prompt(plugin, "Plugin name")?;
    let file_type = super::value_or_prompt(file_type, "Datamodel file type")?;

    let options = WorkbenchOptions { root, plugin, file_type };
    match crate::app::api::scaffold_workbench(&options)? {
        WorkbenchOutcome::Created { files, fields } => {
            println!("✅ Generated workbench files ({} field(s)):", fields);
            for file in files {
                println!("  {}", file.display());
            }
        }
        WorkbenchOutcome::Skipped { reason } => {
            eprintln!("⚠️  Skipped workbench scaffolding: {}", reason);
        }
    }
    Ok(())
}
