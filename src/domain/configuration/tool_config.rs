//! Tool configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::changelog::EntryHeader;
use crate::domain::package::DEFAULT_ARCHITECTURE;

/// Configuration loaded from `omvpack.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Changelog drafting defaults.
    #[serde(default)]
    pub changelog: ChangelogConfig,
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GitHubApiConfig,
    /// Package build configuration.
    #[serde(default)]
    pub build: BuildConfig,
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.changelog.validate()?;
        self.github.validate()?;
        self.build.validate()?;
        Ok(())
    }
}

/// Defaults for the header and trailer of drafted changelog entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Changelog location, relative to the working directory.
    #[serde(default = "default_changelog_path")]
    pub path: String,
    /// Package name; falls back to the repository name.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_distribution")]
    pub distribution: String,
    #[serde(default = "default_urgency")]
    pub urgency: String,
    #[serde(default = "default_maintainer")]
    pub maintainer: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: default_changelog_path(),
            package: None,
            version: default_version(),
            distribution: default_distribution(),
            urgency: default_urgency(),
            maintainer: default_maintainer(),
        }
    }
}

impl ChangelogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("path", &self.path),
            ("version", &self.version),
            ("distribution", &self.distribution),
            ("urgency", &self.urgency),
            ("maintainer", &self.maintainer),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("changelog.{} must not be empty", name)));
            }
        }
        if self.package.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(AppError::InvalidConfig("changelog.package must not be empty".to_string()));
        }
        Ok(())
    }

    /// Entry header for `repo`, using the configured package name when set.
    pub fn header_for(&self, repo: &str) -> EntryHeader {
        EntryHeader {
            package: self.package.clone().unwrap_or_else(|| repo.to_string()),
            version: self.version.clone(),
            distribution: self.distribution.clone(),
            urgency: self.urgency.clone(),
            maintainer: self.maintainer.clone(),
        }
    }
}

fn default_changelog_path() -> String {
    "debian/changelog".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_distribution() -> String {
    "unstable".to_string()
}

fn default_urgency() -> String {
    "medium".to_string()
}

fn default_maintainer() -> String {
    "Maintainer <maintainer@example.com>".to_string()
}

/// GitHub REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubApiConfig {
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "github.api_url is not a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Package build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Architecture suffix of the built package file.
    #[serde(default = "default_architecture")]
    pub architecture: String,
    /// Install debhelper through apt-get when it is missing.
    #[serde(default = "default_true")]
    pub install_missing: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { architecture: default_architecture(), install_missing: default_true() }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.architecture.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "build.architecture must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_architecture() -> String {
    DEFAULT_ARCHITECTURE.to_string()
}

fn default_true() -> bool {
    true
}
