//! Tool configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, ToolConfig};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "omvpack.toml";

/// Load configuration from `path`.
///
/// A missing file yields the defaults unless `required` is set, which is the
/// case when the path was given explicitly on the command line.
pub fn load_config(path: &Path, required: bool) -> Result<ToolConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(ToolConfig::default());
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::missing_file("Config file", path));
        }
        Err(err) => return Err(AppError::Io(err)),
    };

    log::debug!("Loading config from {}", path.display());
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ToolConfig, AppError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
