// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resource loading: `strings_<tag>.<ext>` files into a [`ResourceSet`].
//!
//! A file that cannot be decoded or parsed never aborts the run on its own.
//! Its tag still enters the set with an empty table and the failure is kept
//! as a [`LoadIssue`] so the caller can report it. Strict mode turns the
//! first issue into an error instead.

pub mod parse;

use crate::host::Host;
use crate::types::{LoadIssue, LocaleTag, ResourceSet, StringTable};
use anyhow::{bail, Result};
use colored::*;
use std::path::{Path, PathBuf};

pub use parse::parse_table;

/// File name prefix shared by every resource file.
pub const RESOURCE_PREFIX: &str = "strings_";

/// A resource file selected for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub tag: LocaleTag,
    pub path: PathBuf,
}

pub struct ResourceLoader {
    default_tag: LocaleTag,
    extension: String,
    strict: bool,
    verbose: bool,
}

impl ResourceLoader {
    pub fn new(default_tag: LocaleTag, extension: impl Into<String>) -> Self {
        Self {
            default_tag,
            extension: extension.into(),
            strict: false,
            verbose: true,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Pick the resource files out of a folder listing, sorted by file name.
    pub fn select(&self, children: &[PathBuf]) -> Vec<ResourceFile> {
        let mut files: Vec<ResourceFile> = children
            .iter()
            .filter_map(|path| {
                let tag = resource_tag(path, &self.extension)?;
                if tag.as_str().is_empty() {
                    if self.verbose {
                        eprintln!(
                            "{} skipping {} (no locale after `{}`)",
                            "warning:".yellow().bold(),
                            path.display(),
                            RESOURCE_PREFIX
                        );
                    }
                    return None;
                }
                Some(ResourceFile {
                    tag,
                    path: path.clone(),
                })
            })
            .collect();
        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        files
    }

    /// File the default locale is expected in.
    pub fn default_file(&self, folder: &Path) -> PathBuf {
        folder.join(format!(
            "{}{}.{}",
            RESOURCE_PREFIX, self.default_tag, self.extension
        ))
    }

    /// Read and parse every file. The default tag is always present in the
    /// result, first, even when no file provides it.
    pub fn load<H: Host + ?Sized>(&self, host: &H, files: &[ResourceFile]) -> Result<ResourceSet> {
        let mut set = ResourceSet::new(self.default_tag.clone());

        for file in files {
            let bytes = host.read_bytes(&file.path)?;
            let table = match parse_table(&bytes) {
                Ok(table) => table,
                Err(reason) => {
                    if self.strict {
                        bail!("malformed resource file {}: {}", file.path.display(), reason);
                    }
                    if self.verbose {
                        eprintln!(
                            "{} {} is not a valid string table ({}); locale `{}` falls back to the defaults",
                            "warning:".yellow().bold(),
                            file.path.display(),
                            reason,
                            file.tag
                        );
                    }
                    set.record_issue(LoadIssue {
                        tag: file.tag.clone(),
                        path: file.path.clone(),
                        reason,
                    });
                    StringTable::new()
                }
            };
            set.insert(file.tag.clone(), table);
            set.set_source(file.tag.clone(), file.path.clone());
        }

        Ok(set)
    }
}

/// Locale tag of a resource file, or `None` when `path` is not one.
///
/// Matches `strings_<tag>.<extension>` with a case-insensitive prefix and
/// extension; the tag is everything after the first `_` of the file stem.
pub fn resource_tag(path: &Path, extension: &str) -> Option<LocaleTag> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let prefix = stem.get(..RESOURCE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(RESOURCE_PREFIX) {
        return None;
    }
    let (_, tag) = stem.split_once('_')?;
    Some(LocaleTag::new(tag))
}
