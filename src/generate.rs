// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generation run: resource files in, Dart unit out.
//!
//! ```text
//! values folder -> ResourceLoader -> KeyClassifier (per locale) -> CodeEmitter -> Host
//! ```
//!
//! Locales are classified independently and may run on the rayon pool; the
//! results are collected back in resource-set order before emission, so the
//! output does not depend on scheduling.

use crate::classify::KeyClassifier;
use crate::config::GeneratorConfig;
use crate::emit::{with_aliases, CodeEmitter};
use crate::host::Host;
use crate::iso639::is_known_language;
use crate::loader::ResourceLoader;
use crate::report::{GenerationReport, LocaleSummary, Outcome};
use crate::types::{LocaleTag, LocaleUnit, ResourceSet};
use anyhow::{anyhow, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Content of a freshly created resource file.
pub const EMPTY_RESOURCE: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write the output when it changed, then reformat it.
    Write,
    /// Compare against the existing output without touching the project.
    Check,
    /// Produce the text only.
    DryRun,
}

impl RunMode {
    fn touches_project(&self) -> bool {
        matches!(self, RunMode::Write)
    }
}

/// Generated text together with the report describing it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub report: GenerationReport,
}

pub struct Generator<'h, H: Host + ?Sized> {
    host: &'h H,
    config: GeneratorConfig,
    verbose: bool,
}

impl<'h, H: Host + ?Sized> Generator<'h, H> {
    pub fn new(host: &'h H, config: GeneratorConfig) -> Self {
        Self {
            host,
            config,
            verbose: true,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn run(&self, project_root: &Path, mode: RunMode) -> Result<Generation> {
        let default_tag = LocaleTag::new(self.config.default_locale.as_str());
        let folder = self.host.values_folder(
            project_root,
            &self.config.values_dir,
            mode.touches_project(),
        )?;

        let loader = ResourceLoader::new(default_tag.clone(), self.config.extension.as_str())
            .strict(self.config.strict)
            .verbose(self.verbose);
        let files = loader.select(&self.host.list_children(&folder)?);

        let mut created_default = None;
        if mode.touches_project() && !files.iter().any(|f| f.tag == default_tag) {
            let path = loader.default_file(&folder);
            self.host.create_file(&path, EMPTY_RESOURCE)?;
            created_default = Some(path);
        }

        let set = loader.load(self.host, &files)?;
        let units = build_units(&set, self.config.parallel)?;
        let text = CodeEmitter::new().emit(&units)?;
        let fingerprint = blake3::hash(text.as_bytes());

        let output = self.config.output_path(project_root);
        let outcome = match mode {
            RunMode::DryRun => Outcome::NotWritten,
            RunMode::Check | RunMode::Write => {
                let current = self.host.read_output(&output)?;
                let up_to_date = current
                    .map(|existing| blake3::hash(existing.as_bytes()) == fingerprint)
                    .unwrap_or(false);
                if up_to_date {
                    Outcome::Unchanged
                } else if mode == RunMode::Check {
                    Outcome::Stale
                } else {
                    self.host.overwrite(&output, &text)?;
                    self.host.reformat(&output)?;
                    Outcome::Written
                }
            }
        };

        let report = GenerationReport {
            created_at: chrono::Utc::now().to_rfc3339(),
            project_root: project_root.to_path_buf(),
            output,
            default_locale: default_tag,
            created_default,
            locales: summarize(&set, &units),
            issues: set.issues().to_vec(),
            fingerprint: fingerprint.to_hex().to_string(),
            bytes: text.len(),
            outcome,
        };

        Ok(Generation { text, report })
    }
}

/// Classify every locale of `set` against its default table.
pub fn build_units(set: &ResourceSet, parallel: bool) -> Result<Vec<LocaleUnit>> {
    let classifier = KeyClassifier::new(set.default_table())?;
    let tags: Vec<&LocaleTag> = set.tags().collect();

    let classify = |tag: &LocaleTag| -> Result<LocaleUnit> {
        let is_default = tag == set.default_tag();
        let table = if is_default {
            classifier.classify_default()?
        } else {
            let raw = set
                .get(tag)
                .ok_or_else(|| anyhow!("locale `{}` vanished from the resource set", tag))?;
            classifier.classify_locale(raw)?
        };
        Ok(LocaleUnit {
            tag: tag.clone(),
            direction: tag.direction(),
            table,
            alias_of: None,
            is_default,
        })
    };

    if parallel {
        tags.par_iter().map(|tag| classify(*tag)).collect()
    } else {
        tags.iter().map(|tag| classify(*tag)).collect()
    }
}

/// Generate the text for an in-memory resource set.
pub fn render(set: &ResourceSet, parallel: bool) -> Result<String> {
    let units = build_units(set, parallel)?;
    CodeEmitter::new().emit(&units)
}

fn summarize(set: &ResourceSet, units: &[LocaleUnit]) -> Vec<LocaleSummary> {
    with_aliases(units)
        .iter()
        .map(|unit| {
            let source: Option<PathBuf> = set.source(&unit.tag).cloned();
            let malformed = set
                .issues()
                .iter()
                .find(|issue| issue.tag == unit.tag)
                .map(|issue| issue.reason.clone());
            let mut summary = LocaleSummary::from_unit(unit, source, malformed);
            if !is_known_language(unit.tag.language()) {
                summary.warnings.push(format!(
                    "`{}` is not an ISO 639-1 language code",
                    unit.tag.language()
                ));
            }
            summary
        })
        .collect()
}
