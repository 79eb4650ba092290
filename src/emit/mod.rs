// SPDX-License-Identifier: PMPL-1.0-or-later

//! Code emission
//!
//! Renders classified locales into one Dart unit, in this order: imports,
//! base class `S` with every default accessor, one class per locale, the
//! `he_IL` alias when an `iw` locale exists, and the delegate class.

pub mod dart;

use crate::types::{LocaleTag, LocaleUnit, TextDirection, HEBREW_ALIAS};
use anyhow::{anyhow, Result};

/// Insert the `he_IL` alias after the first legacy Hebrew (`iw`) locale.
///
/// Nothing is added when no `iw` locale exists or `he_IL` is already a
/// locale of its own.
pub fn with_aliases(units: &[LocaleUnit]) -> Vec<LocaleUnit> {
    let mut expanded = Vec::with_capacity(units.len() + 1);
    let mut aliased = units.iter().any(|u| u.tag.as_str() == HEBREW_ALIAS);
    for unit in units {
        expanded.push(unit.clone());
        if !aliased && unit.alias_of.is_none() && unit.tag.is_legacy_hebrew() {
            expanded.push(LocaleUnit::alias(
                LocaleTag::new(HEBREW_ALIAS),
                unit.tag.clone(),
            ));
            aliased = true;
        }
    }
    expanded
}

#[derive(Debug, Default)]
pub struct CodeEmitter;

impl CodeEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete unit. `units` must contain the default locale.
    pub fn emit(&self, units: &[LocaleUnit]) -> Result<String> {
        let base = units
            .iter()
            .find(|u| u.is_default)
            .ok_or_else(|| anyhow!("no default locale to build the base class from"))?;
        let units = with_aliases(units);

        let mut lines = Vec::new();
        lines.push(dart::IMPORTS.to_string());
        lines.push(dart::BANNER.to_string());

        self.base_class(&mut lines, base);
        for unit in &units {
            self.locale_class(&mut lines, unit);
        }
        self.delegate_class(&mut lines, &units);

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }

    fn base_class(&self, lines: &mut Vec<String>, base: &LocaleUnit) {
        lines.push(dart::BASE_CLASS_HEADER.to_string());
        self.accessors(lines, base, false);
        dart::class_close(lines);
    }

    fn locale_class(&self, lines: &mut Vec<String>, unit: &LocaleUnit) {
        let parent = unit
            .alias_of
            .as_ref()
            .map(LocaleTag::as_str)
            .unwrap_or(dart::BASE_CLASS);
        dart::class_open(lines, unit.tag.as_str(), parent);

        if unit.is_default {
            // Overrides would repeat the base class verbatim.
            if unit.direction == TextDirection::Rtl {
                dart::text_direction(lines, unit.direction);
            }
        } else {
            dart::text_direction(lines, unit.direction);
            if !unit.table.accessor_names().is_empty() {
                lines.push(String::new());
            }
            self.accessors(lines, unit, true);
        }
        dart::class_close(lines);
    }

    fn accessors(&self, lines: &mut Vec<String>, unit: &LocaleUnit, is_override: bool) {
        for entry in &unit.table.simple {
            dart::string_getter(lines, entry, is_override);
        }
        for entry in &unit.table.parametrized {
            dart::parametrized_method(lines, entry, is_override);
        }
        for group in &unit.table.plurals {
            dart::plural_method(lines, group, is_override);
        }
    }

    fn delegate_class(&self, lines: &mut Vec<String>, units: &[LocaleUnit]) {
        lines.push(dart::DELEGATE_HEADER.to_string());
        for unit in units {
            dart::supported_locale(lines, unit.tag.language(), unit.tag.country());
        }
        lines.push(dart::DELEGATE_RESOLUTION.to_string());
        for unit in units {
            dart::load_case(lines, unit.tag.as_str());
        }
        lines.push(dart::DELEGATE_FOOTER.to_string());
    }
}
