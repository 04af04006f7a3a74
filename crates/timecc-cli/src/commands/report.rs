//! Report command: scan a timing directory and print per-project totals.
//!
//! Output formats: human-readable text (default) and JSON (`--json`).

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use timecc_core::{Project, scan_dir, sort_report};

// ========== Human-Readable Output ==========

/// Formats the sorted projects as the human-readable report.
///
/// One line per project with its total, then each file indented with its
/// own duration, then the grand total. An empty scan prints only the
/// total line.
pub fn format_report(projects: &[Project]) -> String {
    let mut output = String::new();
    let mut total = 0.0;

    for project in projects {
        writeln!(output, "{}: {:.2}s", project.name, project.total_secs).unwrap();
        for file in &project.files {
            writeln!(output, "  {:.2}s {}", file.duration_secs, file.name).unwrap();
        }
        total += project.total_secs;
    }

    writeln!(output, "Total: {total:.2}s").unwrap();
    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub total_secs: f64,
    pub projects: &'a [Project],
}

/// Formats the sorted projects as pretty-printed JSON.
pub fn format_report_json(projects: &[Project], generated_at: DateTime<Utc>) -> Result<String> {
    let total_secs: f64 = projects.iter().map(|p| p.total_secs).sum();

    let report = JsonReport {
        generated_at: generated_at.to_rfc3339(),
        total_secs,
        projects,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Runs the report command against a timing directory.
pub fn run(dir: &Path, json: bool) -> Result<()> {
    let mut projects =
        scan_dir(dir).with_context(|| format!("failed to scan {}", dir.display()))?;
    sort_report(&mut projects);
    tracing::debug!(dir = %dir.display(), projects = projects.len(), "scan finished");

    if json {
        let output = format_report_json(&projects, Utc::now())?;
        println!("{output}");
    } else {
        let output = format_report(&projects);
        print!("{output}");
    }

    Ok(())
}
