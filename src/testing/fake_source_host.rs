use std::sync::Mutex;

use crate::domain::{AppError, CommitRecord, PullRequestRecord};
use crate::ports::SourceHostPort;

pub struct FakeSourceHost {
    pub commits: Vec<CommitRecord>,
    pub pulls: Vec<PullRequestRecord>,
    /// When set, every request fails with a network error carrying this text.
    pub failure: Option<String>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeSourceHost {
    pub fn new(commits: Vec<CommitRecord>, pulls: Vec<PullRequestRecord>) -> Self {
        Self { commits, pulls, failure: None, requests: Mutex::new(Vec::new()) }
    }

    pub fn failing(details: &str) -> Self {
        Self { failure: Some(details.to_string()), ..Self::new(Vec::new(), Vec::new()) }
    }

    fn record(&self, resource: &str, owner: &str, repo: &str) -> Result<(), AppError> {
        self.requests.lock().unwrap().push(format!("{}/{}/{}", owner, repo, resource));
        match &self.failure {
            Some(details) => Err(AppError::NetworkFailure {
                url: format!("fake://{}/{}/{}", owner, repo, resource),
                details: details.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl SourceHostPort for FakeSourceHost {
    fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>, AppError> {
        self.record("commits", owner, repo)?;
        Ok(self.commits.clone())
    }

    fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, AppError> {
        self.record("pulls", owner, repo)?;
        Ok(self.pulls.clone())
    }
}
