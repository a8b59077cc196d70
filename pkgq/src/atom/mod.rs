//! Package specifier helpers.
//!
//! Query tools accept package strings in several shapes: fully qualified
//! `category/name-version` strings, dependency-style atoms with operator
//! prefixes (`>=sys-apps/portage-2.1.6.13`), and fnmatch-style glob queries
//! (`sys-*/*`). This module splits qualified package strings into their
//! parts, orders them, and detects which queries need glob matching.

pub mod version;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use version::Version;

/// A qualified package string split into category, name, and version.
///
/// Atoms order by category, then name (lexicographic), then version
/// (Gentoo version ordering).
///
/// # Examples
///
/// ```
/// use pkgq::atom::PackageAtom;
///
/// let atom = PackageAtom::parse("sys-apps/portage-2.1.6.8").unwrap();
/// assert_eq!(atom.category(), "sys-apps");
/// assert_eq!(atom.name(), "portage");
/// assert_eq!(atom.version().as_str(), "2.1.6.8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageAtom {
    category: String,
    name: String,
    version: Version,
}

impl PackageAtom {
    /// Parse a qualified package string of the form `category/name-version`.
    ///
    /// The name/version boundary is the rightmost hyphen whose remainder is
    /// a valid version expression, so hyphenated names like
    /// `sys-apps/pkgcore-0.4.7.15-r1` split correctly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAtom` if the string has no category separator, more
    /// than one, or no name-version split where the version parses.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::atom::PackageAtom;
    ///
    /// let atom = PackageAtom::parse("sys-apps/pkgcore-0.4.7.15-r1").unwrap();
    /// assert_eq!(atom.name(), "pkgcore");
    /// assert_eq!(atom.version().revision(), 1);
    ///
    /// assert!(PackageAtom::parse("portage-2.1.6.8").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidAtom {
            atom: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split('/');
        let (category, rest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(category), Some(rest), None) => (category, rest),
            (_, _, Some(_)) => return Err(invalid("more than one category separator")),
            _ => return Err(invalid("missing category separator")),
        };
        if category.is_empty() {
            return Err(invalid("empty category"));
        }

        // Rightmost hyphen whose remainder parses as a version wins.
        for (pos, _) in rest.rmatch_indices('-') {
            let candidate = &rest[pos + 1..];
            if !candidate.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            if let Ok(version) = Version::parse(candidate) {
                let name = &rest[..pos];
                if name.is_empty() {
                    return Err(invalid("empty package name"));
                }
                return Ok(Self {
                    category: category.to_string(),
                    name: name.to_string(),
                    version,
                });
            }
        }

        Err(invalid("no version found after package name"))
    }

    /// The package category, e.g. `sys-apps`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The package name, e.g. `portage`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package version, including any revision.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// Order two qualified package strings.
///
/// Compares by category, then name, then version, mirroring how a package
/// listing sorts.
///
/// # Errors
///
/// Returns `InvalidAtom` or `InvalidVersion` if either string fails to
/// parse.
///
/// # Examples
///
/// ```
/// use pkgq::atom::compare_package_strings;
/// use std::cmp::Ordering;
///
/// let ordering = compare_package_strings(
///     "sys-apps/portage-2.1.6.8",
///     "sys-apps/portage-2.2_rc25",
/// ).unwrap();
/// assert_eq!(ordering, Ordering::Less);
/// ```
pub fn compare_package_strings(a: &str, b: &str) -> Result<Ordering> {
    let a = PackageAtom::parse(a)?;
    let b = PackageAtom::parse(b)?;
    Ok(a.cmp(&b))
}

/// Check whether a package query uses fnmatch-style globbing.
///
/// Queries starting with `=` are extended-prefix atoms; their trailing `*`
/// is atom syntax rather than globbing, so they report `false`.
///
/// # Examples
///
/// ```
/// use pkgq::atom::uses_globbing;
///
/// assert!(uses_globbing("sys-*/*-2.1.6.13"));
/// assert!(!uses_globbing(">=sys-apps/portage-2.1.6.13"));
/// assert!(!uses_globbing("=sys-apps/portage-2*"));
/// ```
#[must_use]
pub fn uses_globbing(query: &str) -> bool {
    if !query
        .chars()
        .any(|c| matches!(c, '*' | '?' | '[' | ']' | '!'))
    {
        return false;
    }
    !query.starts_with('=')
}
