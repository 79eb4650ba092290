// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key classification
//!
//! Splits a locale's ids into three phases, emitted in this order:
//!
//! 1. **simple**: no placeholder marker, becomes a getter
//! 2. **parametrized**: contains `$`, becomes a method with one `String`
//!    parameter per distinct placeholder
//! 3. **plural groups**: `<base>Zero|One|Two|Few|Many|Other` ids sharing a
//!    base, collapsed into one switching method
//!
//! A group only exists when its `Other` member does. Without it every
//! suffixed id stays an ordinary entry under its full name.
//!
//! Non-default locales are restricted to ids the default table defines.
//! Anything else is listed in [`ClassifiedTable::dropped`].

pub mod placeholders;

use crate::types::{
    ClassifiedTable, ParametrizedEntry, PluralCategory, PluralGroup, SimpleEntry, StringTable,
};
use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Parameter name used when the `Other` template has no placeholder.
pub const DEFAULT_PLURAL_PARAMETER: &str = "count";

fn plural_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+)(Zero|One|Two|Few|Many|Other)$").expect("plural pattern is valid")
    })
}

/// Split an id into its plural base and category, if it carries a suffix.
pub fn plural_parts(id: &str) -> Result<Option<(&str, PluralCategory)>> {
    let Some(caps) = plural_regex().captures(id) else {
        return Ok(None);
    };
    let (Some(base), Some(suffix)) = (caps.get(1), caps.get(2)) else {
        return Ok(None);
    };
    let category = PluralCategory::from_suffix(suffix.as_str())?;
    Ok(Some((base.as_str(), category)))
}

/// Classifies tables against one default table.
pub struct KeyClassifier<'a> {
    default: &'a StringTable,
    default_plural_bases: IndexSet<String>,
}

impl<'a> KeyClassifier<'a> {
    pub fn new(default: &'a StringTable) -> Result<Self> {
        let ids: Vec<&str> = default.keys().map(String::as_str).collect();
        let default_plural_bases = find_plural_groups(&ids)?
            .into_keys()
            .map(str::to_string)
            .collect();
        Ok(Self {
            default,
            default_plural_bases,
        })
    }

    /// Classify the default table itself; nothing is restricted.
    pub fn classify_default(&self) -> Result<ClassifiedTable> {
        let ids: Vec<&str> = self.default.keys().map(String::as_str).collect();
        classify_ids(self.default, &ids)
    }

    /// Classify another locale, keeping only ids the default table defines.
    pub fn classify_locale(&self, table: &StringTable) -> Result<ClassifiedTable> {
        let (kept, dropped): (Vec<&str>, Vec<&str>) = table
            .keys()
            .map(String::as_str)
            .partition(|id| self.default.contains_key(*id));

        let mut classified = classify_ids(table, &kept)?;
        classified.dropped = dropped.into_iter().map(str::to_string).collect();

        // An ungrouped `itemsOne` cannot override the base class's `items(...)`.
        let mut warnings = Vec::new();
        for id in classified
            .simple
            .iter()
            .map(|e| e.id.as_str())
            .chain(classified.parametrized.iter().map(|e| e.id.as_str()))
        {
            if let Some((base, _)) = plural_parts(id)? {
                if self.default_plural_bases.contains(base) {
                    warnings.push(format!(
                        "`{}` has no `{}Other`, so it does not override the plural `{}`",
                        id, base, base
                    ));
                }
            }
        }
        classified.warnings = warnings;
        Ok(classified)
    }
}

/// Plural groups among `ids`, in first-seen order. Groups without an
/// `Other` member are discarded.
fn find_plural_groups<'i>(
    ids: &[&'i str],
) -> Result<IndexMap<&'i str, BTreeMap<PluralCategory, &'i str>>> {
    let mut groups: IndexMap<&str, BTreeMap<PluralCategory, &str>> = IndexMap::new();
    for &id in ids {
        if let Some((base, category)) = plural_parts(id)? {
            groups.entry(base).or_default().insert(category, id);
        }
    }
    groups.retain(|_, forms| forms.contains_key(&PluralCategory::Other));
    Ok(groups)
}

fn classify_ids(table: &StringTable, ids: &[&str]) -> Result<ClassifiedTable> {
    let groups = find_plural_groups(ids)?;
    let grouped: IndexSet<&str> = groups
        .values()
        .flat_map(|forms| forms.values().copied())
        .collect();

    let text = |id: &str| table.get(id).cloned().unwrap_or_default();

    let mut classified = ClassifiedTable::default();
    for &id in ids.iter().filter(|id| !grouped.contains(**id)) {
        let value = text(id);
        if placeholders::has_marker(&value) {
            classified.parametrized.push(ParametrizedEntry {
                id: id.to_string(),
                parameters: placeholders::extract_parameters(&value),
                text: value,
            });
        } else {
            classified.simple.push(SimpleEntry {
                id: id.to_string(),
                text: value,
            });
        }
    }

    for (base, forms) in groups {
        let forms: BTreeMap<PluralCategory, String> = forms
            .into_iter()
            .map(|(category, id)| (category, text(id)))
            .collect();
        let parameter = forms
            .get(&PluralCategory::Other)
            .and_then(|other| placeholders::first_parameter(other))
            .unwrap_or_else(|| DEFAULT_PLURAL_PARAMETER.to_string());
        classified.plurals.push(PluralGroup {
            base: base.to_string(),
            parameter,
            forms,
        });
    }

    Ok(classified)
}
