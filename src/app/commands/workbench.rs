//! Scaffold workbench YAML documents from a plugin datamodel.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::workbench::{WorkbenchDocuments, parse_properties, paths};
use crate::domain::AppError;

/// Options for scaffolding workbench documents.
#[derive(Debug, Clone)]
pub struct WorkbenchOptions {
    /// Directory containing `openmediavault-<plugin>/`.
    pub root: PathBuf,
    pub plugin: String,
    /// Datamodel file type, e.g. `services`.
    pub file_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchOutcome {
    /// Documents were written.
    Created { files: Vec<PathBuf>, fields: usize },
    /// The datamodel could not be used; nothing was written.
    Skipped { reason: String },
}

pub fn execute(options: &WorkbenchOptions) -> Result<WorkbenchOutcome, AppError> {
    let schema_path = paths::datamodel(&options.root, &options.file_type, &options.plugin);

    let properties = match load_schema(&schema_path) {
        Ok(properties) => properties,
        Err(
            err @ (AppError::MissingFile { .. }
            | AppError::ParseError { .. }
            | AppError::MissingProperties { .. }),
        ) => {
            log::warn!("Skipping workbench scaffolding: {}", err);
            return Ok(WorkbenchOutcome::Skipped { reason: err.to_string() });
        }
        Err(err) => return Err(err),
    };

    let documents = WorkbenchDocuments::build(&options.file_type, &options.plugin, &properties);
    let (root, plugin, file_type) = (&options.root, &options.plugin, &options.file_type);

    let form_page = paths::form_page(root, file_type, plugin);
    let navigation_page = paths::navigation_page(root, file_type, plugin);
    let navigation_item = paths::navigation_item(root, file_type, plugin);

    write_yaml(&form_page, &documents.form_page)?;
    write_yaml(&navigation_page, &documents.navigation_page)?;
    write_yaml(&navigation_item, &documents.navigation_item)?;

    Ok(WorkbenchOutcome::Created {
        files: vec![form_page, navigation_page, navigation_item],
        fields: properties.len(),
    })
}

fn load_schema(path: &Path) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::missing_file("Datamodel", path),
        _ => AppError::Io(err),
    })?;
    parse_properties(&content, path)
}

fn write_yaml<T: Serialize>(path: &Path, document: &T) -> Result<(), AppError> {
    let content = serde_yaml::to_string(document).map_err(|err| {
        AppError::InternalError(format!("Failed to serialize {}: {}", path.display(), err))
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
