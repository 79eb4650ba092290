// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for arbgen
//!
//! A run builds a [`ResourceSet`] from the resource files, classifies every
//! locale into a [`ClassifiedTable`], wraps each one in a [`LocaleUnit`] and
//! hands the units to the emitter. Nothing here outlives a single run.

use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Raw `id -> template text` pairs of one locale, in file order.
pub type StringTable = IndexMap<String, String>;

/// Language codes whose text runs right-to-left.
pub const RTL_LANGUAGES: &[&str] = &["ar", "dv", "fa", "ha", "he", "iw", "ji", "ps", "ur", "yi"];

/// Legacy ISO 639 code for Hebrew, still reported by some Android devices.
pub const LEGACY_HEBREW: &str = "iw";

/// Tag under which the legacy Hebrew locale is re-exported.
pub const HEBREW_ALIAS: &str = "he_IL";

/// Locale identifier such as `en` or `pt_BR`, as found in the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the first `_`.
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or("")
    }

    /// Region part; only a tag with exactly two `_`-separated parts has one.
    pub fn country(&self) -> &str {
        let parts: Vec<&str> = self.0.split('_').collect();
        if parts.len() == 2 {
            parts[1]
        } else {
            ""
        }
    }

    pub fn direction(&self) -> TextDirection {
        if RTL_LANGUAGES.contains(&self.language()) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn is_legacy_hebrew(&self) -> bool {
        self.language() == LEGACY_HEBREW
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Name of the matching `TextDirection` constant in Flutter.
    pub fn dart_name(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Plural categories recognised as id suffixes.
///
/// Variant order is the order branches are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn all() -> &'static [PluralCategory] {
        &[
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    }

    /// Id suffix naming this category, e.g. `One` in `itemsOne`.
    pub fn suffix(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "Zero",
            PluralCategory::One => "One",
            PluralCategory::Two => "Two",
            PluralCategory::Few => "Few",
            PluralCategory::Many => "Many",
            PluralCategory::Other => "Other",
        }
    }

    pub fn from_suffix(suffix: &str) -> Result<Self> {
        match suffix {
            "Zero" => Ok(PluralCategory::Zero),
            "One" => Ok(PluralCategory::One),
            "Two" => Ok(PluralCategory::Two),
            "Few" => Ok(PluralCategory::Few),
            "Many" => Ok(PluralCategory::Many),
            "Other" => Ok(PluralCategory::Other),
            _ => bail!("unsupported plural category suffix `{}`", suffix),
        }
    }

    /// Literal the generated `switch` compares against. `Other` has none:
    /// it is always the `default:` branch.
    pub fn case_label(&self) -> Option<&'static str> {
        match self {
            PluralCategory::Zero => Some("0"),
            PluralCategory::One => Some("1"),
            PluralCategory::Two => Some("2"),
            PluralCategory::Few => Some("few"),
            PluralCategory::Many => Some("many"),
            PluralCategory::Other => None,
        }
    }
}

/// Accessor without parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleEntry {
    pub id: String,
    pub text: String,
}

/// Accessor whose template contains placeholder markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParametrizedEntry {
    pub id: String,
    pub text: String,
    /// Distinct placeholder names, in order of first appearance.
    pub parameters: Vec<String>,
}

/// Family of `<base><Category>` ids that has an `Other` member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralGroup {
    pub base: String,
    /// Single parameter shared by every category branch.
    pub parameter: String,
    pub forms: BTreeMap<PluralCategory, String>,
}

impl PluralGroup {
    pub fn other(&self) -> &str {
        self.forms
            .get(&PluralCategory::Other)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One locale's entries after classification, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedTable {
    pub simple: Vec<SimpleEntry>,
    pub parametrized: Vec<ParametrizedEntry>,
    pub plurals: Vec<PluralGroup>,
    /// Ids defined by the locale but absent from the default table.
    pub dropped: Vec<String>,
    pub warnings: Vec<String>,
}

impl ClassifiedTable {
    /// Accessor names in emission order.
    pub fn accessor_names(&self) -> Vec<&str> {
        self.simple
            .iter()
            .map(|e| e.id.as_str())
            .chain(self.parametrized.iter().map(|e| e.id.as_str()))
            .chain(self.plurals.iter().map(|g| g.base.as_str()))
            .collect()
    }
}

/// Why a resource file contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadIssue {
    pub tag: LocaleTag,
    pub path: PathBuf,
    pub reason: String,
}

/// Every locale's raw table for one run.
#[derive(Debug, Clone)]
pub struct ResourceSet {
    default_tag: LocaleTag,
    tables: IndexMap<LocaleTag, StringTable>,
    sources: IndexMap<LocaleTag, PathBuf>,
    issues: Vec<LoadIssue>,
}

impl ResourceSet {
    /// Empty set already holding an empty default table.
    pub fn new(default_tag: LocaleTag) -> Self {
        let mut tables = IndexMap::new();
        tables.insert(default_tag.clone(), StringTable::new());
        Self {
            default_tag,
            tables,
            sources: IndexMap::new(),
            issues: Vec::new(),
        }
    }

    /// Insert or replace the table for `tag`. The default tag keeps its
    /// leading position; other tags keep their first insertion position.
    pub fn insert(&mut self, tag: LocaleTag, table: StringTable) {
        self.tables.insert(tag, table);
    }

    pub fn set_source(&mut self, tag: LocaleTag, path: PathBuf) {
        self.sources.insert(tag, path);
    }

    pub fn record_issue(&mut self, issue: LoadIssue) {
        self.issues.push(issue);
    }

    pub fn default_tag(&self) -> &LocaleTag {
        &self.default_tag
    }

    pub fn default_table(&self) -> &StringTable {
        // `new` seeds the default entry and nothing removes it.
        &self.tables[&self.default_tag]
    }

    pub fn get(&self, tag: &LocaleTag) -> Option<&StringTable> {
        self.tables.get(tag)
    }

    pub fn source(&self, tag: &LocaleTag) -> Option<&PathBuf> {
        self.sources.get(tag)
    }

    pub fn issues(&self) -> &[LoadIssue] {
        &self.issues
    }

    pub fn tags(&self) -> impl Iterator<Item = &LocaleTag> {
        self.tables.keys()
    }
}

/// A locale ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleUnit {
    pub tag: LocaleTag,
    pub direction: TextDirection,
    pub table: ClassifiedTable,
    /// Set for re-exports that extend another locale without overrides.
    pub alias_of: Option<LocaleTag>,
    pub is_default: bool,
}

impl LocaleUnit {
    pub fn alias(tag: LocaleTag, target: LocaleTag) -> Self {
        Self {
            tag,
            direction: TextDirection::Rtl,
            table: ClassifiedTable::default(),
            alias_of: Some(target),
            is_default: false,
        }
    }
}
