// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run report: what each locale contributed and what happened to the output.

use crate::types::{LoadIssue, LocaleTag, LocaleUnit, TextDirection};
use anyhow::{anyhow, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What the run did with the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Written,
    Unchanged,
    /// Check mode found the output out of date; nothing was written.
    Stale,
    /// Text was produced but not handed to the host.
    NotWritten,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSummary {
    pub tag: LocaleTag,
    pub direction: TextDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<LocaleTag>,
    pub simple: usize,
    pub parametrized: usize,
    pub plurals: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<String>,
}

impl LocaleSummary {
    pub fn from_unit(unit: &LocaleUnit, source: Option<PathBuf>, malformed: Option<String>) -> Self {
        Self {
            tag: unit.tag.clone(),
            direction: unit.direction,
            source,
            alias_of: unit.alias_of.clone(),
            simple: unit.table.simple.len(),
            parametrized: unit.table.parametrized.len(),
            plurals: unit.table.plurals.len(),
            dropped: unit.table.dropped.clone(),
            warnings: unit.table.warnings.clone(),
            malformed,
        }
    }

    pub fn accessors(&self) -> usize {
        self.simple + self.parametrized + self.plurals
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub created_at: String,
    pub project_root: PathBuf,
    pub output: PathBuf,
    pub default_locale: LocaleTag,
    /// Default resource file created because none existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_default: Option<PathBuf>,
    pub locales: Vec<LocaleSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<LoadIssue>,
    /// blake3 hex digest of the generated text.
    pub fingerprint: String,
    pub bytes: usize,
    pub outcome: Outcome,
}

impl GenerationReport {
    pub fn locale(&self, tag: &str) -> Option<&LocaleSummary> {
        self.locales.iter().find(|l| l.tag.as_str() == tag)
    }

    pub fn total_dropped(&self) -> usize {
        self.locales.iter().map(|l| l.dropped.len()).sum()
    }
}

/// Print a summary table to the terminal
pub fn print_summary(report: &GenerationReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "=== ARBGEN ===".bold().cyan());
    println!(
        "Project: {}  |  Output: {}",
        report.project_root.display(),
        report.output.display()
    );
    if let Some(created) = &report.created_default {
        println!("Created empty default resource file {}", created.display());
    }
    println!();

    println!(
        "  {:<12} {:>4} {:>7} {:>7} {:>7} {:>8}",
        "Locale", "Dir", "Simple", "Params", "Plural", "Dropped"
    );
    println!("  {}", "-".repeat(52));
    for locale in &report.locales {
        let name = match &locale.alias_of {
            Some(target) => format!("{} -> {}", locale.tag, target),
            None => locale.tag.to_string(),
        };
        let line = format!(
            "  {:<12} {:>4} {:>7} {:>7} {:>7} {:>8}",
            name,
            locale.direction.dart_name(),
            locale.simple,
            locale.parametrized,
            locale.plurals,
            locale.dropped.len()
        );
        if locale.malformed.is_some() {
            println!("{}", line.red());
        } else if locale.tag == report.default_locale {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
        for warning in &locale.warnings {
            println!("    {} {}", "warning:".yellow(), warning);
        }
    }
    println!();

    for issue in &report.issues {
        println!(
            "  {} {} ({}): {}",
            "malformed".red().bold(),
            issue.path.display(),
            issue.tag,
            issue.reason
        );
    }
    if report.total_dropped() > 0 {
        println!(
            "  {} ids were dropped because the default locale does not define them",
            report.total_dropped()
        );
    }

    let status = match report.outcome {
        Outcome::Written => "written".green(),
        Outcome::Unchanged => "unchanged".green(),
        Outcome::Stale => "out of date".red(),
        Outcome::NotWritten => "not written".yellow(),
    };
    println!(
        "  Output {} ({} bytes, blake3 {})",
        status,
        report.bytes,
        &report.fingerprint[..report.fingerprint.len().min(16)]
    );
    println!();
}

/// Write the report as JSON or YAML, chosen by file extension.
pub fn write_report(report: &GenerationReport, path: &Path) -> Result<()> {
    let content = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(report)?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(report)?,
        _ => {
            return Err(anyhow!(
                "unsupported report extension for {}",
                path.display()
            ))
        }
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
