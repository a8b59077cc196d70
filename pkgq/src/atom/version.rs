//! Gentoo package version parsing and ordering.
//!
//! Versions follow the Package Manager Specification grammar: dotted
//! numeric components, an optional trailing letter, zero or more
//! `_alpha`/`_beta`/`_pre`/`_rc`/`_p` suffixes with optional numbers, and
//! an optional `-rN` revision.
//!
//! Ordering follows the PMS comparison algorithm:
//! - the first numeric component compares as an integer;
//! - later components with a leading zero compare as strings (with trailing
//!   zeros stripped), so `1.01 < 1.1`;
//! - a trailing letter sorts after its absence, so `1.0 < 1.0a`;
//! - suffixes sort `_alpha < _beta < _pre < _rc < (none) < _p`;
//! - revisions compare as integers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A release suffix, ordered by how it ranks against a plain release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixKind {
    Alpha,
    Beta,
    Pre,
    Rc,
    P,
}

impl SuffixKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "alpha" => Some(Self::Alpha),
            "beta" => Some(Self::Beta),
            "pre" => Some(Self::Pre),
            "rc" => Some(Self::Rc),
            "p" => Some(Self::P),
            _ => None,
        }
    }

    /// Rank against a missing suffix: `_p` is the only suffix that sorts
    /// after a plain release.
    fn rank(kind: Option<Self>) -> u8 {
        match kind {
            Some(Self::Alpha) => 0,
            Some(Self::Beta) => 1,
            Some(Self::Pre) => 2,
            Some(Self::Rc) => 3,
            None => 4,
            Some(Self::P) => 5,
        }
    }
}

/// A parsed Gentoo package version.
///
/// Comparison implements the PMS version ordering; equality is defined by
/// that ordering, so `1.0` and `1.00` compare equal even though their
/// textual forms differ.
///
/// # Examples
///
/// ```
/// use pkgq::atom::Version;
///
/// let old: Version = "2.1.6.8".parse().unwrap();
/// let new: Version = "2.2_rc25".parse().unwrap();
/// assert!(old < new);
///
/// let release: Version = "1.0".parse().unwrap();
/// let rc: Version = "1.0_rc1".parse().unwrap();
/// let patched: Version = "1.0_p1".parse().unwrap();
/// assert!(rc < release);
/// assert!(release < patched);
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    /// Numeric components, kept textual for the leading-zero rule.
    numbers: Vec<String>,
    letter: Option<char>,
    suffixes: Vec<(SuffixKind, u64)>,
    revision: u64,
    /// The string the version was parsed from, for display.
    original: String,
}

impl Version {
    /// Parse a version string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersion` if the string does not match the version
    /// grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::atom::Version;
    ///
    /// assert!(Version::parse("2.1.6.8").is_ok());
    /// assert!(Version::parse("1.0b_alpha4-r2").is_ok());
    /// assert!(Version::parse("not-a-version").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidVersion {
            version: s.to_string(),
            reason: reason.to_string(),
        };

        // Split off the -rN revision, if any
        let (rest, revision) = match s.rfind("-r") {
            Some(pos) if s.len() > pos + 2 && s[pos + 2..].bytes().all(|b| b.is_ascii_digit()) => {
                let rev = s[pos + 2..]
                    .parse::<u64>()
                    .map_err(|_| invalid("revision out of range"))?;
                (&s[..pos], rev)
            }
            _ => (s, 0),
        };

        // Split off _suffix parts
        let mut parts = rest.split('_');
        let base = parts.next().unwrap_or_default();
        let mut suffixes = Vec::new();
        for part in parts {
            let split_at = part
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(part.len());
            let kind = SuffixKind::parse(&part[..split_at])
                .ok_or_else(|| invalid("unknown release suffix"))?;
            let number = if split_at == part.len() {
                0
            } else {
                part[split_at..]
                    .parse::<u64>()
                    .map_err(|_| invalid("suffix number out of range"))?
            };
            suffixes.push((kind, number));
        }

        // Base: dotted numeric components, optionally ending in a letter
        let (base, letter) = match base.chars().last() {
            Some(c) if c.is_ascii_lowercase() => (&base[..base.len() - 1], Some(c)),
            _ => (base, None),
        };

        let numbers: Vec<String> = base.split('.').map(str::to_string).collect();
        if numbers
            .iter()
            .any(|n| n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid("components must be non-empty digit sequences"));
        }

        Ok(Self {
            numbers,
            letter,
            suffixes,
            revision,
            original: s.to_string(),
        })
    }

    /// The revision number (0 when no `-rN` part is present).
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::atom::Version;
    ///
    /// assert_eq!(Version::parse("1.0-r3").unwrap().revision(), 3);
    /// assert_eq!(Version::parse("1.0").unwrap().revision(), 0);
    /// ```
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The version as it was written, including any revision.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Compare two numeric components per the PMS rules.
///
/// The first component always compares as an integer. Later components
/// compare as fractional strings when either has a leading zero.
fn compare_component(a: &str, b: &str, first: bool) -> Ordering {
    if !first && (a.starts_with('0') || b.starts_with('0')) {
        let a = a.trim_end_matches('0');
        let b = b.trim_end_matches('0');
        return a.cmp(b);
    }
    // Compare as integers without overflow: longer digit string wins
    // once leading zeros are gone.
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric components, position by position; extra components sort
        // after their absence ("1.0" < "1.0.1")
        let pairs = self.numbers.len().max(other.numbers.len());
        for i in 0..pairs {
            let ordering = match (self.numbers.get(i), other.numbers.get(i)) {
                (Some(a), Some(b)) => compare_component(a, b, i == 0),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // Trailing letter: absent sorts first
        let letter_ordering = match (self.letter, other.letter) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if letter_ordering != Ordering::Equal {
            return letter_ordering;
        }

        // Suffixes, position by position; a missing suffix ranks between
        // _rc and _p
        let pairs = self.suffixes.len().max(other.suffixes.len());
        for i in 0..pairs {
            let a = self.suffixes.get(i).copied();
            let b = other.suffixes.get(i).copied();
            let ordering = SuffixKind::rank(a.map(|s| s.0))
                .cmp(&SuffixKind::rank(b.map(|s| s.0)))
                .then_with(|| a.map_or(0, |s| s.1).cmp(&b.map_or(0, |s| s.1)));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        self.revision.cmp(&other.revision)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}
