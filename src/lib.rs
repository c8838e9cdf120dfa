//! Bytescan: raw-byte scanners for non-ASCII bytes and suspicious UTF-8
//! punctuation.
//!
//! The crate provides:
//! - Threshold and multi-byte pattern scanners over byte slices (`scan`)
//! - Console report formatting for both scans (`report`)
//! - File-oriented helpers and the error type (`io`)
//! - The `scan-ascii` / `scan-suspicious` CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use bytescan::scan::{first_non_ascii, suspicious_matches};
//!
//! let text = "caf\u{e9} \u{2014} done".as_bytes();
//!
//! let hit = first_non_ascii(text).unwrap();
//! assert_eq!((hit.offset, hit.value), (3, 0xC3));
//!
//! let labels: Vec<_> = suspicious_matches(text).map(|m| m.label()).collect();
//! assert_eq!(labels, ["Em Dash"]);
//! ```

pub mod io;
pub mod report;
pub mod scan;

#[cfg(feature = "cli")]
pub mod cli;
