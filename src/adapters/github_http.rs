//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, CommitRecord, GitHubApiConfig, PullRequestRecord};
use crate::ports::SourceHostPort;

const GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("omvpack/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a client; requests are anonymous when `token` is `None`.
    pub fn new(config: &GitHubApiConfig, token: Option<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), token, client })
    }

    fn endpoint(&self, owner: &str, repo: &str, resource: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("GitHub API URL is not a base URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo, resource]);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        log::debug!("GET {}", url);
        let network_error =
            |details: String| AppError::NetworkFailure { url: url.to_string(), details };

        let mut request = self.client.get(url.clone()).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| network_error(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(network_error(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text.trim()
            )));
        }

        response.json().map_err(|e| network_error(format!("Failed to parse response: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    sha: String,
    commit: ApiCommitDetail,
}

#[derive(Debug, Deserialize)]
struct ApiCommitDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    number: u64,
    title: String,
}

impl SourceHostPort for HttpGitHubClient {
    fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitRecord>, AppError> {
        let url = self.endpoint(owner, repo, "commits")?;
        let commits: Vec<ApiCommit> = self.get_json(url)?;
        log::info!("Fetched {} commit(s) from {}/{}", commits.len(), owner, repo);

        Ok(commits
            .into_iter()
            .map(|c| CommitRecord { sha: c.sha, message: c.commit.message })
            .collect())
    }

    fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, AppError> {
        let mut url = self.endpoint(owner, repo, "pulls")?;
        url.query_pairs_mut().append_pair("state", "closed");
        let pulls: Vec<ApiPullRequest> = self.get_json(url)?;
        log::info!("Fetched {} closed pull request(s) from {}/{}", pulls.len(), owner, repo);

        Ok(pulls
            .into_iter()
            .map(|p| PullRequestRecord { number: p.number, title: p.title })
            .collect())
    }
}
