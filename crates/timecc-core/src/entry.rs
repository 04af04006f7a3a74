//! Timing entry parsing: filename identity and duration content.
//!
//! The build wrapper writes one file per compiled source, named
//! `<project>__[<subdir>__...]<file>.time`, whose content starts with the
//! elapsed time in nanoseconds.

use std::num::ParseIntError;

use thiserror::Error;

/// Nanoseconds per second, as a float divisor.
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Project placeholder for entries whose name carries no `__` delimiter.
const NO_PROJECT: &str = "@";

/// Marker substituted for the `meson-generated_` filename prefix.
const GENERATED_MARKER: &str = "@@";

/// Project/file identity recovered from a timing filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    pub project: String,
    pub file: String,
}

/// Parse a timing filename into its project and display file name.
///
/// The name is split on `"__"`: the last segment is the file, the rest
/// joined with `"/"` form the project. `meson-generated_` becomes `@@`
/// and `.time` is dropped. A name with no delimiter belongs to the
/// catch-all `@` project.
#[must_use]
pub fn parse_entry_name(name: &str) -> EntryName {
    let parts: Vec<&str> = name.split("__").collect();
    // split always yields at least one part
    let raw_file = parts.last().copied().unwrap_or_default();

    // Substring replace, not a suffix strip: a `.time` anywhere in the
    // name is removed. This matches the wrapper's naming exactly.
    let file = raw_file
        .replace("meson-generated_", GENERATED_MARKER)
        .replace(".time", "");

    let project = parts[..parts.len() - 1].join("/");
    let project = if project.is_empty() {
        NO_PROJECT.to_string()
    } else {
        project
    };

    EntryName { project, file }
}

/// Failure to extract a nanosecond count from a timing file's content.
#[derive(Debug, Error)]
#[error("invalid nanosecond count: {0}")]
pub struct ParseDurationError(#[from] ParseIntError);

/// Parse a timing file's content into a duration in seconds.
///
/// The content is `<integer_nanoseconds>[ <ignored>...]`; only the first
/// space-separated token matters. Empty content or a non-numeric first
/// token is an error.
#[allow(clippy::cast_precision_loss)]
pub fn parse_duration_secs(content: &str) -> Result<f64, ParseDurationError> {
    let token = content.trim().split(' ').next().unwrap_or_default();
    let nanos: i64 = token.parse()?;
    Ok(nanos as f64 / NANOS_PER_SEC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generated_entry() {
        let entry = parse_entry_name("libfoo__meson-generated_bar.c.time");
        assert_eq!(entry.project, "libfoo");
        assert_eq!(entry.file, "@@bar.c");
    }

    #[test]
    fn test_parse_entry_without_project() {
        let entry = parse_entry_name("standalone.time");
        assert_eq!(entry.project, "@");
        assert_eq!(entry.file, "standalone");
    }

    #[test]
    fn test_parse_nested_project() {
        let entry = parse_entry_name("a__b__c.time");
        assert_eq!(entry.project, "a/b");
        assert_eq!(entry.file, "c");
    }

    #[test]
    fn test_parse_plain_entry() {
        let entry = parse_entry_name("libswan__net.cc.time");
        assert_eq!(entry.project, "libswan");
        assert_eq!(entry.file, "net.cc");
    }

    #[test]
    fn test_time_removed_anywhere_in_name() {
        // Substring semantics: `.time` is removed even mid-name.
        let entry = parse_entry_name("proj__a.timeb.time");
        assert_eq!(entry.file, "ab");
    }

    #[test]
    fn test_duration_first_token_only() {
        let secs = parse_duration_secs("1500000000 foo bar").unwrap();
        assert!((secs - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_trims_whitespace() {
        let secs = parse_duration_secs("  250000000\n").unwrap();
        assert!((secs - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_empty_content_fails() {
        assert!(parse_duration_secs("").is_err());
        assert!(parse_duration_secs("   \n").is_err());
    }

    #[test]
    fn test_duration_non_numeric_fails() {
        assert!(parse_duration_secs("fast 123").is_err());
    }
}
