pub mod github_http;
pub mod process_runner;

pub use github_http::HttpGitHubClient;
pub use process_runner::ProcessToolRunner;
