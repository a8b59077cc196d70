#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pkgq
//!
//! Helper library for Gentoo-style package query tools.
//!
//! This library provides the utilities a query front-end needs: symlink-aware
//! path handling for file-ownership lookups, package string parsing and
//! ordering, and ChangeLog splitting.
//!
//! ## Core Functionality
//!
//! - [`extend_realpaths`]: extend an ordered path list with the resolved
//!   targets of its symlinks, deduplicated by canonical identity
//! - [`PackageAtom`] and [`Version`]: package string parsing with Gentoo
//!   version ordering
//! - [`split_changelog`] and [`ChangeLogEntry`]: ChangeLog text splitting
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pkgq::{compare_package_strings, uses_globbing};
//! use std::cmp::Ordering;
//!
//! let ordering = compare_package_strings(
//!     "sys-apps/portage-2.1.6.8",
//!     "sys-apps/portage-2.2_rc25",
//! ).unwrap();
//! assert_eq!(ordering, Ordering::Less);
//!
//! assert!(uses_globbing("sys-apps/[bp]ortage-2.1.6.13"));
//! ```

pub mod atom;
pub mod changelog;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use atom::{compare_package_strings, uses_globbing, PackageAtom, Version};
pub use changelog::{split_changelog, ChangeLogEntry};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{extend_realpaths, extend_realpaths_value};
