use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Extract the `properties` object from a datamodel JSON document.
///
/// Only checks that the text is JSON with a non-empty `properties` object.
pub fn parse_properties(content: &str, path: &Path) -> Result<Map<String, Value>, AppError> {
    let document: Value = serde_json::from_str(content).map_err(|err| AppError::ParseError {
        what: path.display().to_string(),
        details: err.to_string(),
    })?;

    match document.get("properties") {
        Some(Value::Object(properties)) if !properties.is_empty() => Ok(properties.clone()),
        _ => Err(AppError::MissingProperties { path: path.to_path_buf() }),
    }
}
