//! Changelog entry model and rendering.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

const ENTRY_TEMPLATE_NAME: &str = "changelog_entry";
const ENTRY_TEMPLATE: &str = include_str!("entry.j2");

/// Date layout of the maintainer trailer line.
pub const TRAILER_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A single change line in a changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLine {
    Commit { short_hash: String, summary: String },
    PullRequest { number: u64, title: String },
}

impl fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeLine::Commit { short_hash, summary } => {
                write!(f, "  * [_{}_] {}", short_hash, summary)
            }
            ChangeLine::PullRequest { number, title } => write!(f, "  * #_{}_ {}", number, title),
        }
    }
}

/// Header and trailer fields of a changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    pub package: String,
    pub version: String,
    pub distribution: String,
    pub urgency: String,
    pub maintainer: String,
}

/// A new block to be placed at the head of the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub header: EntryHeader,
    pub lines: Vec<ChangeLine>,
    pub date: DateTime<FixedOffset>,
}

impl ChangelogEntry {
    /// Render the block: header, blank line, change lines, blank line, trailer.
    pub fn render(&self) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        let render_error = |err: minijinja::Error| AppError::TemplateRender {
            template: ENTRY_TEMPLATE_NAME.to_string(),
            details: err.to_string(),
        };

        env.add_template(ENTRY_TEMPLATE_NAME, ENTRY_TEMPLATE).map_err(render_error)?;
        let lines: Vec<String> = self.lines.iter().map(ChangeLine::to_string).collect();
        env.get_template(ENTRY_TEMPLATE_NAME)
            .map_err(render_error)?
            .render(context! {
                package => &self.header.package,
                version => &self.header.version,
                distribution => &self.header.distribution,
                urgency => &self.header.urgency,
                maintainer => &self.header.maintainer,
                date => self.date.format(TRAILER_DATE_FORMAT).to_string(),
                lines => lines,
            })
            .map_err(render_error)
    }
}
