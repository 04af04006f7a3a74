//! Core domain logic for the build timing aggregator.
//!
//! This crate contains the fundamental types and logic for:
//! - Entry parsing: recovering project/file identity from timing filenames
//! - Scanning: walking a timing directory and aggregating per-project totals

pub mod entry;
pub mod scan;

pub use entry::{EntryName, ParseDurationError, parse_duration_secs, parse_entry_name};
pub use scan::{Project, ScanError, TimedFile, scan_dir, sort_report};
