//! Merge freshly fetched history into an existing changelog.

use chrono::{DateTime, FixedOffset};

use super::entry::{ChangeLine, ChangelogEntry, EntryHeader};
use super::seen::{SeenIdentifiers, short_hash};
use crate::domain::AppError;

/// A commit as returned by the source-hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
}

impl CommitRecord {
    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// A closed pull request as returned by the source-hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
}

/// Result of merging fetched history into a changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every fetched identifier is already recorded.
    NothingToDo,
    /// A new entry was rendered ahead of the prior content.
    Updated {
        /// Full replacement content for the changelog file.
        content: String,
        /// The block that was prepended.
        entry: String,
        /// Number of change lines in the new block.
        added: usize,
    },
}

/// Compute the change lines that are not yet recorded in `existing`.
///
/// Commits come first, then pull requests, each in fetched order.
pub fn new_change_lines(
    existing: &str,
    commits: &[CommitRecord],
    pulls: &[PullRequestRecord],
) -> Vec<ChangeLine> {
    let mut seen = SeenIdentifiers::scan(existing);
    log::debug!(
        "Changelog already records {} commit key(s) and {} pull request(s)",
        seen.commit_count(),
        seen.pull_request_count()
    );

    let mut lines = Vec::new();
    for commit in commits {
        let hash = short_hash(&commit.sha);
        if seen.has_commit(&hash) {
            continue;
        }
        seen.insert_commit(&hash);
        lines.push(ChangeLine::Commit { short_hash: hash, summary: commit.summary().to_string() });
    }

    for pull in pulls {
        if seen.has_pull_request(pull.number) {
            continue;
        }
        seen.insert_pull_request(pull.number);
        lines.push(ChangeLine::PullRequest { number: pull.number, title: pull.title.clone() });
    }

    lines
}

/// Merge fetched commits and pull requests into `existing` changelog text.
///
/// The new block is always followed by a blank line, then the prior content
/// byte-for-byte.
pub fn merge(
    existing: &str,
    commits: &[CommitRecord],
    pulls: &[PullRequestRecord],
    header: &EntryHeader,
    date: DateTime<FixedOffset>,
) -> Result<MergeOutcome, AppError> {
    let lines = new_change_lines(existing, commits, pulls);
    if lines.is_empty() {
        return Ok(MergeOutcome::NothingToDo);
    }

    let added = lines.len();
    let entry = ChangelogEntry { header: header.clone(), lines, date }.render()?;

    let mut content = String::with_capacity(entry.len() + 1 + existing.len());
    content.push_str(&entry);
    content.push('\n');
    content.push_str(existing);

    Ok(MergeOutcome::Updated { content, entry, added })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn header() -> EntryHeader {
        EntryHeader {
            package: "demo".into(),
            version: "0.1.0".into(),
            distribution: "unstable".into(),
            urgency: "medium".into(),
            maintainer: "Maintainer <maintainer@example.com>".into(),
        }
    }

    fn date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn commit(sha: &str, message: &str) -> CommitRecord {
        CommitRecord { sha: sha.into(), message: message.into() }
    }

    fn pull(number: u64, title: &str) -> PullRequestRecord {
        PullRequestRecord { number, title: title.into() }
    }

    fn updated_content(outcome: MergeOutcome) -> String {
        match outcome {
            MergeOutcome::Updated { content, .. } => content,
            MergeOutcome::NothingToDo => panic!("expected an update"),
        }
    }

    #[test]
    fn first_run_ends_with_blank_line_after_trailer() {
        let outcome = merge(
            "",
            &[commit("abc1234ffff0000", "Fix mounts\n\nLonger body")],
            &[pull(7, "Add quota page")],
            &header(),
            date(),
        )
        .unwrap();

        assert_eq!(
            updated_content(outcome),
            "demo (0.1.0) unstable; urgency=medium\n\n  * [_abc1234_] Fix mounts\n  * #_7_ Add quota page\n\n -- Maintainer <maintainer@example.com>  Tue, 02 Jan 2024 03:04:05 +0000\n\n"
        );
    }

    #[test]
    fn prior_content_is_kept_verbatim_after_blank_line() {
        let prior = "demo (0.0.9) unstable; urgency=low\n\n  * Initial\n\n -- A <a@b>  x\n";
        let outcome =
            merge(prior, &[commit("1111111aaaa", "Next")], &[], &header(), date()).unwrap();

        let content = updated_content(outcome);
        assert!(content.starts_with("demo (0.1.0) unstable; urgency=medium\n\n  * [_1111111_] Next\n"));
        assert!(content.ends_with(&format!("\n\n{}", prior)));
    }

    #[test]
    fn nothing_to_do_when_everything_is_recorded() {
        let prior = "demo (0.1.0) unstable; urgency=medium\n\n  * [_abc1234_] Fix\n  * #_7_ Page\n";
        let outcome =
            merge(prior, &[commit("abc1234999", "Fix")], &[pull(7, "Page")], &header(), date())
                .unwrap();
        assert_eq!(outcome, MergeOutcome::NothingToDo);
    }

    #[test]
    fn nothing_to_do_when_nothing_fetched() {
        assert_eq!(merge("", &[], &[], &header(), date()).unwrap(), MergeOutcome::NothingToDo);
    }

    #[test]
    fn only_unrecorded_items_are_added() {
        let prior = "  * [_abc1234_] Old\n  * #_7_ Old page\n";
        let lines = new_change_lines(
            prior,
            &[commit("abc1234000", "Old"), commit("fedcba9000", "New")],
            &[pull(7, "Old page"), pull(8, "New page")],
        );
        assert_eq!(
            lines,
            vec![
                ChangeLine::Commit { short_hash: "fedcba9".into(), summary: "New".into() },
                ChangeLine::PullRequest { number: 8, title: "New page".into() },
            ]
        );
    }

    #[test]
    fn duplicates_within_one_batch_are_added_once() {
        let lines = new_change_lines(
            "",
            &[commit("abc1234000", "One"), commit("abc1234111", "Two")],
            &[pull(3, "A"), pull(3, "A again")],
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn issue_reference_in_prose_blocks_pull_request() {
        let prior = "  * [_1234abc_] Fix crash reported in #12\n";
        let lines = new_change_lines(prior, &[], &[pull(12, "Fix crash")]);
        assert!(lines.is_empty());
    }

    fn hex_sha() -> impl Strategy<Value = String> {
        "[0-9a-f]{40}"
    }

    proptest! {
        #[test]
        fn merging_twice_is_idempotent(
            prior in "[ -~\n]{0,200}",
            shas in prop::collection::vec(hex_sha(), 0..6),
            numbers in prop::collection::vec(1u64..5000, 0..6),
        ) {
            let commits: Vec<CommitRecord> =
                shas.iter().map(|sha| commit(sha, "Change\nbody")).collect();
            let pulls: Vec<PullRequestRecord> =
                numbers.iter().map(|n| pull(*n, "Title")).collect();

            let first = match merge(&prior, &commits, &pulls, &header(), date()).unwrap() {
                MergeOutcome::Updated { content, .. } => content,
                MergeOutcome::NothingToDo => prior.clone(),
            };
            let second = merge(&first, &commits, &pulls, &header(), date()).unwrap();
            prop_assert_eq!(second, MergeOutcome::NothingToDo);
        }

        #[test]
        fn commit_added_iff_short_hash_absent(
            prior in "[0-9a-f #_\n]{0,120}",
            sha in hex_sha(),
        ) {
            let lines = new_change_lines(&prior, &[commit(&sha, "Change")], &[]);
            let present = prior.contains(&sha[..7]);
            prop_assert_eq!(lines.is_empty(), present);
        }

        #[test]
        fn pull_request_added_iff_number_absent(
            prior in "[0-9#_ \n]{0,80}",
            number in 1u64..500,
        ) {
            let lines = new_change_lines(&prior, &[], &[pull(number, "Title")]);
            let digits = number.to_string();
            let present = ["#", "#_"].iter().any(|marker| {
                prior.match_indices(marker).any(|(at, _)| {
                    let rest = &prior[at + marker.len()..];
                    let run: String = rest.chars().take_while(char::is_ascii_digit).collect();
                    run == digits
                })
            });
            prop_assert_eq!(lines.is_empty(), present);
        }
    }
}
