pub mod changelog;
pub mod configuration;
pub mod error;
pub mod package;
pub mod workbench;

pub use changelog::{
    ChangeLine, CommitRecord, EntryHeader, MergeOutcome, PullRequestRecord, SeenIdentifiers,
};
pub use configuration::{BuildConfig, ChangelogConfig, GitHubApiConfig, ToolConfig};
pub use error::AppError;
pub use package::PackageArtifact;
pub use workbench::{WidgetKind, WorkbenchDocuments};
