//! Gentoo ChangeLog splitting.
//!
//! A ChangeLog is a plain-text blob where each entry opens with a header
//! line of the form `*name-version (DD Mon YYYY)` and runs until the next
//! header. Parsing is lenient: preamble before the first header is skipped,
//! and a header whose date does not parse still yields an entry, just
//! without a date.

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used in ChangeLog headers, e.g. `20 Dec 2008`.
const HEADER_DATE_FORMAT: &str = "%d %b %Y";

/// One ChangeLog entry: a versioned header and its body text.
///
/// # Examples
///
/// ```
/// use pkgq::changelog::split_changelog;
///
/// let entries = split_changelog("*portage-2.1.6 (07 Dec 2008)\n\n  2.1.6 final release.\n");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].package(), "portage-2.1.6");
/// assert!(entries[0].date().is_some());
/// assert!(entries[0].body().contains("final release"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLogEntry {
    package: String,
    date: Option<NaiveDate>,
    body: String,
}

impl ChangeLogEntry {
    /// The `name-version` string from the header, e.g. `portage-2.1.6.2`.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The header date, when it parsed.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The entry body with surrounding blank lines trimmed.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Split a ChangeLog text blob into its entries.
///
/// Entries appear in file order, which for a well-kept ChangeLog is newest
/// first. An empty blob, or one with no header lines, yields no entries.
///
/// # Examples
///
/// ```
/// use pkgq::changelog::split_changelog;
///
/// let entries = split_changelog("no headers here");
/// assert!(entries.is_empty());
/// ```
#[must_use]
pub fn split_changelog(changelog: &str) -> Vec<ChangeLogEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(String, Option<NaiveDate>, Vec<&str>)> = None;

    for line in changelog.lines() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('*') {
            if let Some(entry) = current.take() {
                entries.push(finish_entry(entry));
            }
            current = Some(parse_header(header));
        } else if let Some((_, _, body)) = current.as_mut() {
            body.push(trimmed);
        }
        // Preamble before the first header is dropped
    }

    if let Some(entry) = current.take() {
        entries.push(finish_entry(entry));
    }

    entries
}

/// Parse the part of a header line after the leading `*`.
fn parse_header(header: &str) -> (String, Option<NaiveDate>, Vec<&str>) {
    let header = header.trim();
    let (package, remainder) = match header.split_once(char::is_whitespace) {
        Some((package, remainder)) => (package, remainder),
        None => (header, ""),
    };

    let date = remainder
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), HEADER_DATE_FORMAT).ok());
    if date.is_none() && !remainder.trim().is_empty() {
        log::debug!("unparseable ChangeLog header date: {remainder}");
    }

    (package.to_string(), date, Vec::new())
}

fn finish_entry((package, date, body): (String, Option<NaiveDate>, Vec<&str>)) -> ChangeLogEntry {
    let mut lines: &[&str] = &body;
    while let [rest @ .., last] = lines {
        if last.is_empty() {
            lines = rest;
        } else {
            break;
        }
    }
    while let [first, rest @ ..] = lines {
        if first.is_empty() {
            lines = rest;
        } else {
            break;
        }
    }

    ChangeLogEntry {
        package,
        date,
        body: lines.join("\n"),
    }
}
