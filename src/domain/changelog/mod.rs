//! Debian changelog domain: version lookup, recorded identifiers, and merging.

pub mod entry;
pub mod merge;
pub mod seen;
pub mod version;

pub use entry::{ChangeLine, ChangelogEntry, EntryHeader, TRAILER_DATE_FORMAT};
pub use merge::{CommitRecord, MergeOutcome, PullRequestRecord, merge, new_change_lines};
pub use seen::{SHORT_HASH_LEN, SeenIdentifiers, short_hash};
pub use version::{extract_version, read_package_version, require_package_version};
