//! Directory scan and per-project aggregation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::entry::{ParseDurationError, parse_duration_secs, parse_entry_name};

/// One timed source file, keyed under its project.
#[derive(Debug, Clone, Serialize)]
pub struct TimedFile {
    pub name: String,
    pub duration_secs: f64,
}

/// A group of timed files sharing a project prefix.
///
/// `total_secs` is maintained incrementally and always equals the sum of
/// `files[].duration_secs` once ingestion is complete.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub files: Vec<TimedFile>,
    pub total_secs: f64,
}

impl Project {
    fn new(name: String) -> Self {
        Self {
            name,
            files: Vec::new(),
            total_secs: 0.0,
        }
    }

    fn push(&mut self, file: TimedFile) {
        self.total_secs += file.duration_secs;
        self.files.push(file);
    }
}

/// Failure while scanning a timing directory.
///
/// Any failing entry aborts the whole scan; there is no partial report.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed timing content in {path}: {source}")]
    InvalidDuration {
        path: PathBuf,
        source: ParseDurationError,
    },
}

/// Scan a directory of timing files into per-project aggregates.
///
/// Non-recursive. Projects are created lazily in first-seen order; entries
/// that are not regular files are skipped. Returns an error naming the
/// failing path on any io or duration-parse failure.
pub fn scan_dir(dir: &Path) -> Result<Vec<Project>, ScanError> {
    let mut projects: Vec<Project> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for dir_entry in entries {
        let dir_entry = dir_entry.map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir_entry.path();

        let is_file = dir_entry
            .file_type()
            .map_err(|source| ScanError::Io {
                path: path.clone(),
                source,
            })?
            .is_file();
        if !is_file {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let entry = parse_entry_name(&name);

        let content = fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        let duration_secs =
            parse_duration_secs(&content).map_err(|source| ScanError::InvalidDuration {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(
            project = %entry.project,
            file = %entry.file,
            duration_secs,
            "ingested timing entry"
        );

        let slot = *index.entry(entry.project.clone()).or_insert_with(|| {
            projects.push(Project::new(entry.project));
            projects.len() - 1
        });
        projects[slot].push(TimedFile {
            name: entry.file,
            duration_secs,
        });
    }

    tracing::debug!(projects = projects.len(), "scan complete");
    Ok(projects)
}

/// Order a scan result for display: projects ascending by total time,
/// files within each project ascending by duration. Ties keep encounter
/// order (stable sort).
pub fn sort_report(projects: &mut [Project]) {
    projects.sort_by(|a, b| a.total_secs.total_cmp(&b.total_secs));
    for project in projects {
        project
            .files
            .sort_by(|a, b| a.duration_secs.total_cmp(&b.duration_secs));
    }
}
