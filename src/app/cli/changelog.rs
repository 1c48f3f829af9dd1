//! Changelog command implementation.

use std::path::PathBuf;

use crate::app::api::{ChangelogOptions, ChangelogOutcome};
use crate::domain::{AppError, ToolConfig};

pub fn run_changelog(
    config: &ToolConfig,
    owner: Option<String>,
    repo: Option<String>,
    path: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), AppError> {
    let owner = super::value_or_prompt(owner, "GitHub owner/organization")?;
    let repo = super::value_or_prompt(repo, "Repository name")?;

    let options = ChangelogOptions {
        header: config.changelog.header_for(&repo),
        changelog_path: path.unwrap_or_else(|| PathBuf::from(&config.changelog.path)),
        owner,
        repo,
        dry_run,
    };

    match crate::app::api::draft_changelog(&options, &config.github, github_token())? {
        ChangelogOutcome::NothingToDo => println!("No new changes to add"),
        ChangelogOutcome::Updated { path, added } => {
            println!("✅ Updated {} ({} new line(s))", path.display(), added);
        }
        ChangelogOutcome::Preview { entry, added } => {
            println!("{}", entry);
            println!("({} new line(s); dry run, nothing written)", added);
        }
        ChangelogOutcome::FetchFailed { details } => {
            eprintln!("⚠️  Could not fetch repository history: {}", details);
            eprintln!("Changelog left unchanged.");
        }
    }
    Ok(())
}

/// `GITHUB_TOKEN`, ignoring an empty value.
fn github_token() -> Option<String> {
    let token = std::env::var("GITHUB_TOKEN").ok().filter(|token| !token.trim().is_empty());
    if token.is_none() {
        log::info!("GITHUB_TOKEN not set; using unauthenticated GitHub requests");
    }
    token
}
