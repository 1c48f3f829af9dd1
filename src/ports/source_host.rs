use crate::domain::{AppError, CommitRecord, PullRequestRecord};

/// Read access to a repository's history on a source-hosting service.
pub trait SourceHostPort {
    /// List recent commits of `owner/repo`.
    fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>, AppError>;

    /// List closed pull requests of `owner/repo`.
    fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, AppError>;
}
