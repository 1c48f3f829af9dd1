//! Draft a Debian changelog entry from repository history.
//!
//! The file is updated with a plain read-modify-write. Edits made by another
//! process between the read and the write are lost.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::domain::changelog::{CommitRecord, EntryHeader, MergeOutcome, PullRequestRecord, merge};
use crate::domain::AppError;
use crate::ports::SourceHostPort;

/// Options for drafting a changelog entry.
#[derive(Debug, Clone)]
pub struct ChangelogOptions {
    pub owner: String,
    pub repo: String,
    pub changelog_path: PathBuf,
    pub header: EntryHeader,
    /// Render the entry without writing it.
    pub dry_run: bool,
}

/// What happened to the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogOutcome {
    /// Every fetched commit and pull request is already recorded.
    NothingToDo,
    /// The entry was written ahead of the prior content.
    Updated { path: PathBuf, added: usize },
    /// Dry run: the entry that would have been written.
    Preview { entry: String, added: usize },
    /// Fetching history failed; the changelog was left untouched.
    FetchFailed { details: String },
}

pub fn execute<H: SourceHostPort + ?Sized>(
    host: &H,
    options: &ChangelogOptions,
    now: DateTime<FixedOffset>,
) -> Result<ChangelogOutcome, AppError> {
    let existing = read_existing(&options.changelog_path)?;

    let (commits, pulls) = match fetch_history(host, &options.owner, &options.repo) {
        Ok(history) => history,
        Err(AppError::NetworkFailure { url, details }) => {
            log::error!("Fetching history from {} failed: {}", url, details);
            return Ok(ChangelogOutcome::FetchFailed { details });
        }
        Err(err) => return Err(err),
    };

    match merge(&existing, &commits, &pulls, &options.header, now)? {
        MergeOutcome::NothingToDo => Ok(ChangelogOutcome::NothingToDo),
        MergeOutcome::Updated { entry, added, .. } if options.dry_run => {
            Ok(ChangelogOutcome::Preview { entry, added })
        }
        MergeOutcome::Updated { content, added, .. } => {
            if let Some(parent) = options.changelog_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&options.changelog_path, content)?;
            log::info!("Wrote {} new line(s) to {}", added, options.changelog_path.display());
            Ok(ChangelogOutcome::Updated { path: options.changelog_path.clone(), added })
        }
    }
}

fn read_existing(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("{} does not exist yet; starting a new changelog", path.display());
            Ok(String::new())
        }
        Err(err) => Err(AppError::Io(err)),
    }
}

fn fetch_history<H: SourceHostPort + ?Sized>(
    host: &H,
    owner: &str,
    repo: &str,
) -> Result<(Vec<CommitRecord>, Vec<PullRequestRecord>), AppError> {
    let commits = host.list_commits(owner, repo)?;
    let pulls = host.list_closed_pull_requests(owner, repo)?;
    Ok((commits, pulls))
}
