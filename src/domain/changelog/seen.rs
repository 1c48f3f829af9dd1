//! Identifiers already recorded in a changelog.
//!
//! Detection is a plain substring scan over the whole text: every run of seven
//! lowercase hex characters counts as a recorded commit, and every `#<digits>`
//! (or `#_<digits>`, the form written by this tool) counts as a recorded pull
//! request. Unrelated text can therefore mark an identifier as seen. The scan
//! only has to be stable across runs over the same content.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Length of the abbreviated commit hash used as a dedup key.
pub const SHORT_HASH_LEN: usize = 7;

fn hex_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9a-f]{7,}").expect("hex run pattern must compile"))
}

fn pr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#_?(\d+)").expect("pull request pattern must compile"))
}

/// Commit and pull-request identifiers found in existing changelog text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenIdentifiers {
    commits: HashSet<String>,
    prs: HashSet<String>,
}

impl SeenIdentifiers {
    /// Scan `content` for recorded identifiers.
    pub fn scan(content: &str) -> Self {
        let mut commits = HashSet::new();
        for run in hex_run_pattern().find_iter(content) {
            // Runs are ASCII, so byte windows are char windows.
            let run = run.as_str();
            for start in 0..=run.len() - SHORT_HASH_LEN {
                commits.insert(run[start..start + SHORT_HASH_LEN].to_string());
            }
        }

        let prs = pr_pattern()
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Self { commits, prs }
    }

    pub fn has_commit(&self, short_hash: &str) -> bool {
        self.commits.contains(short_hash)
    }

    pub fn has_pull_request(&self, number: u64) -> bool {
        self.prs.contains(&number.to_string())
    }

    /// Record a commit; returns `false` if it was already present.
    pub fn insert_commit(&mut self, short_hash: &str) -> bool {
        self.commits.insert(short_hash.to_string())
    }

    /// Record a pull request; returns `false` if it was already present.
    pub fn insert_pull_request(&mut self, number: u64) -> bool {
        self.prs.insert(number.to_string())
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    pub fn pull_request_count(&self) -> usize {
        self.prs.len()
    }
}

/// Abbreviate a full commit hash to its lowercase seven-character form.
pub fn short_hash(sha: &str) -> String {
    sha.chars().take(SHORT_HASH_LEN).collect::<String>().to_ascii_lowercase()
}
