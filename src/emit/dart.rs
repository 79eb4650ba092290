// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dart fragments for the generated localization unit.
//!
//! Template text is inserted between double quotes exactly as it was read,
//! so `$name` placeholders are resolved by Dart string interpolation when
//! the accessor is called.

use crate::types::{ParametrizedEntry, PluralGroup, SimpleEntry, TextDirection};

pub const IMPORTS: &str = "import 'dart:async';

import 'package:flutter/foundation.dart';
import 'package:flutter/material.dart';
";

pub const BANNER: &str =
    "//This file is automatically generated. DO NOT EDIT, all your changes would be lost.";

/// Name of the generated base class.
pub const BASE_CLASS: &str = "S";

pub const BASE_CLASS_HEADER: &str = "class S extends WidgetsLocalizations {
  Locale _locale;
  String _lang;

  S(this._locale) {
    _lang = getLang(_locale);
    print('Current locale: $_lang');
  }

  static final GeneratedLocalizationsDelegate delegate =
      new GeneratedLocalizationsDelegate();

  static S of(BuildContext context) {
    var s = Localizations.of<S>(context, WidgetsLocalizations);
    s._lang = getLang(s._locale);
    return s;
  }

  @override
  TextDirection get textDirection => TextDirection.ltr;
";

pub const DELEGATE_HEADER: &str =
    "class GeneratedLocalizationsDelegate extends LocalizationsDelegate<WidgetsLocalizations> {
  const GeneratedLocalizationsDelegate();

  List<Locale> get supportedLocales {
    return [";

pub const DELEGATE_RESOLUTION: &str = "    ];
  }

  LocaleResolutionCallback resolution({Locale fallback}) {
    return (Locale locale, Iterable<Locale> supported) {
      var languageLocale = new Locale(locale.languageCode, \"\");
      if (supported.contains(locale))
        return locale;
      else if (supported.contains(languageLocale))
        return languageLocale;
      else {
        var fallbackLocale = fallback ?? supported.first;
        return fallbackLocale;
      }
    };
  }

  Future<WidgetsLocalizations> load(Locale locale) {
    String lang = getLang(locale);
    switch (lang) {";

pub const DELEGATE_FOOTER: &str = "      default:
        return new SynchronousFuture<WidgetsLocalizations>(new S(locale));
    }
  }

  bool isSupported(Locale locale) => supportedLocales.contains(locale);

  bool shouldReload(GeneratedLocalizationsDelegate old) => false;
}

String getLang(Locale l) => l.countryCode != null && l.countryCode.isEmpty
    ? l.languageCode
    : l.toString();";

fn override_marker(lines: &mut Vec<String>, is_override: bool) {
    if is_override {
        lines.push("  @override".to_string());
    }
}

pub fn class_open(lines: &mut Vec<String>, name: &str, parent: &str) {
    lines.push(format!("class {} extends {} {{", name, parent));
    lines.push(format!("  {}(Locale locale) : super(locale);", name));
}

pub fn text_direction(lines: &mut Vec<String>, direction: TextDirection) {
    lines.push(String::new());
    lines.push("  @override".to_string());
    lines.push(format!(
        "  TextDirection get textDirection => TextDirection.{};",
        direction.dart_name()
    ));
}

pub fn class_close(lines: &mut Vec<String>) {
    lines.push("}".to_string());
    lines.push(String::new());
}

pub fn string_getter(lines: &mut Vec<String>, entry: &SimpleEntry, is_override: bool) {
    override_marker(lines, is_override);
    lines.push(format!("  String get {} => \"{}\";", entry.id, entry.text));
}

pub fn parametrized_method(lines: &mut Vec<String>, entry: &ParametrizedEntry, is_override: bool) {
    override_marker(lines, is_override);
    let params: Vec<String> = entry
        .parameters
        .iter()
        .map(|p| format!("String {}", p))
        .collect();
    lines.push(format!(
        "  String {}({}) => \"{}\";",
        entry.id,
        params.join(", "),
        entry.text
    ));
}

pub fn plural_method(lines: &mut Vec<String>, group: &PluralGroup, is_override: bool) {
    override_marker(lines, is_override);
    lines.push(format!(
        "  String {}(String {}) {{",
        group.base, group.parameter
    ));
    lines.push(format!("    switch ({}) {{", group.parameter));
    for (category, text) in &group.forms {
        // `Other` has no label and becomes the default branch below.
        if let Some(label) = category.case_label() {
            lines.push(format!("      case \"{}\":", label));
            lines.push(format!("        return \"{}\";", text));
        }
    }
    lines.push("      default:".to_string());
    lines.push(format!("        return \"{}\";", group.other()));
    lines.push("    }".to_string());
    lines.push("  }".to_string());
}

pub fn supported_locale(lines: &mut Vec<String>, language: &str, country: &str) {
    lines.push(format!(
        "      new Locale(\"{}\", \"{}\"),",
        language, country
    ));
}

pub fn load_case(lines: &mut Vec<String>, tag: &str) {
    lines.push(format!("      case \"{}\":", tag));
    lines.push(format!(
        "        return new SynchronousFuture<WidgetsLocalizations>(new {}(locale));",
        tag
    ));
}
