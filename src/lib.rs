//! omvpack: build, scaffold, and draft changelogs for OpenMediaVault plugin packages.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOptions, BuildOutcome, ChangelogOptions, ChangelogOutcome, WorkbenchOptions,
    WorkbenchOutcome, build_package, draft_changelog, load_config, scaffold_workbench,
};
pub use domain::AppError;
