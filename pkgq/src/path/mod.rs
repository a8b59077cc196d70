//! Path handling for package queries.
//!
//! This module provides the path utilities behind the file-ownership query:
//! lexical normalization of user-supplied paths, symlink resolution, and
//! symlink-aware extension of query path lists.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts paths to a canonical lexical form by expanding
//! tilde (~), absolutizing relative paths, and resolving `.` and `..`
//! components. It never touches the filesystem.
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the "real" path on the
//! filesystem. Two flavors exist: strict (the path must exist) and
//! best-effort (dangling symlinks and missing paths resolve to a normalized
//! form of wherever the chain leads).
//!
//! ## Real-path extension
//!
//! [`extend_realpaths`] extends an ordered list of query paths with the
//! resolved targets of any symlinks among them, preserving the input as a
//! prefix and deduplicating by canonical identity:
//!
//! ```no_run
//! use pkgq::path::extend_realpaths;
//! use std::path::PathBuf;
//!
//! // With sym -> /etc/target, the target is appended after the inputs
//! let paths = [PathBuf::from("/etc/file"), PathBuf::from("/etc/sym")];
//! let extended = extend_realpaths(&paths).unwrap();
//! assert_eq!(&extended[..2], &paths);
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod realpaths;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key entry points
pub use canonicalize::{canonicalize, realpath, MAX_SYMLINK_DEPTH};
pub use normalize::normalize;
pub use realpaths::{extend_realpaths, extend_realpaths_value};
