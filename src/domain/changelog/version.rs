//! Package version lookup from the head of a Debian changelog.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::AppError;

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\S+\s+\(([^)]*)\)").expect("version pattern must compile")
    })
}

/// Extract the version from a changelog entry line such as
/// `pkg (1.2.3-1) unstable; urgency=low`.
///
/// The version is whatever sits inside the first parenthesis pair after the
/// first token; no further validation is applied.
pub fn extract_version(line: &str) -> Option<&str> {
    version_pattern().captures(line.trim()).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Read the first line of the changelog at `path` and extract its version.
///
/// Returns `Ok(None)` when the line does not carry a version; a missing file
/// is reported as [`AppError::MissingFile`].
pub fn read_package_version(path: &Path) -> Result<Option<String>, AppError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::missing_file("Changelog", path),
        _ => AppError::Io(err),
    })?;

    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;

    let version = extract_version(&first_line).map(str::to_string);
    match &version {
        Some(found) => log::info!("Found package version {} in {}", found, path.display()),
        None => log::warn!("No version pattern on first line of {}", path.display()),
    }
    Ok(version)
}

/// Like [`read_package_version`], but treats a missing version as an error.
pub fn require_package_version(path: &Path) -> Result<String, AppError> {
    read_package_version(path)?.ok_or_else(|| AppError::NoVersionFound { path: path.to_path_buf() })
}
