//! Rendering of pull request summaries.
//!
//! [`render_summary`] produces the plain text block for one pull request.
//! [`OutputWriter`] writes the same block to a stream, optionally styled with
//! terminal attributes.

use chrono::{DateTime, Duration, Utc};
use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::models::{PullRequestStatus, PullRequestSummary};

/// Pull requests created within this many days are flagged as recent.
pub const RECENT_DAYS: i64 = 30;

/// Banner printed before the summary of a newly created pull request.
pub const CREATED_BANNER: &str = "Pull Request was created successfully";

const DETAIL_INDENT: &str = "    * ";

/// Detail lines of a summary, without indentation, in display order.
///
/// Empty fields and a `NotSet` status are left out.
pub fn detail_lines(summary: &PullRequestSummary, now: DateTime<Utc>) -> Vec<String> {
    let mut details = Vec::new();

    if summary.created_on > now - Duration::days(RECENT_DAYS) {
        details.push(format!(
            "Was updated recently ({})",
            format_timestamp(summary.created_on)
        ));
    }
    if !summary.author.is_empty() {
        details.push(format!("Was created by ({})", summary.author));
    }
    if !summary.source_branch.is_empty() {
        details.push(format!("From Source Branch ({})", summary.source_branch));
    }
    if !summary.target_branch.is_empty() {
        details.push(format!("To Target Branch ({})", summary.target_branch));
    }
    if summary.status != PullRequestStatus::NotSet {
        details.push(format!("Current status ({})", summary.status));
    }
    if summary.is_draft {
        details.push("It is a draft!".to_string());
    }
    if !summary.url.is_empty() {
        details.push(format!("URL to this PR ({})", summary.url));
    }

    details
}

/// Renders one pull request as plain text, terminated by a blank line.
pub fn render_summary(summary: &PullRequestSummary, now: DateTime<Utc>) -> String {
    let mut out = format!("PR: {}\n", summary.title);
    for line in detail_lines(summary, now) {
        out.push_str(DETAIL_INDENT);
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out
}

fn format_timestamp(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Writer for command output.
pub struct OutputWriter<W: Write> {
    writer: W,
    styled: bool,
    now: DateTime<Utc>,
}

impl<W: Write> OutputWriter<W> {
    /// Creates a new OutputWriter using the current time as reference.
    pub fn new(writer: W, styled: bool) -> Self {
        Self::with_now(writer, styled, Utc::now())
    }

    /// Creates a new OutputWriter with a fixed reference time.
    pub fn with_now(writer: W, styled: bool, now: DateTime<Utc>) -> Self {
        Self {
            writer,
            styled,
            now,
        }
    }

    /// Returns whether terminal styling is enabled.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Writes one pull request summary.
    pub fn write_summary(&mut self, summary: &PullRequestSummary) -> io::Result<()> {
        if !self.styled {
            return write!(self.writer, "{}", render_summary(summary, self.now));
        }

        writeln!(self.writer, "{}", format!("PR: {}", summary.title).bold())?;
        let mut details = String::new();
        for line in detail_lines(summary, self.now) {
            details.push_str(DETAIL_INDENT);
            details.push_str(&line);
            details.push('\n');
        }
        writeln!(self.writer, "{}", details.dim().italic())
    }

    /// Writes the banner announcing a created pull request.
    pub fn write_created_banner(&mut self) -> io::Result<()> {
        if self.styled {
            writeln!(
                self.writer,
                "{}",
                CREATED_BANNER.bold().italic().dim().on_green()
            )
        } else {
            writeln!(self.writer, "{CREATED_BANNER}")
        }
    }

    /// Flushes any buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consumes the writer and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
