pub mod tool_config;

pub use tool_config::{BuildConfig, ChangelogConfig, GitHubApiConfig, ToolConfig};
