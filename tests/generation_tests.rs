// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end generation runs against temporary Flutter project layouts

use arbgen::config::GeneratorConfig;
use arbgen::generate::{Generation, Generator, RunMode};
use arbgen::host::FsHost;
use arbgen::report::Outcome;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let values = dir.path().join("res/values");
    fs::create_dir_all(&values).unwrap();
    for (name, body) in files {
        fs::write(values.join(name), body).unwrap();
    }
    dir
}

fn run(root: &Path, mode: RunMode) -> Generation {
    let host = FsHost::new();
    Generator::new(&host, GeneratorConfig::default())
        .verbose(false)
        .run(root, mode)
        .expect("generation should succeed")
}

fn count(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

#[test]
fn test_single_parametrized_default_string() {
    let dir = project(&[("strings_en.arb", r#"{"greeting": "Hello $name"}"#)]);
    let generation = run(dir.path(), RunMode::Write);
    let text = &generation.text;

    assert!(text.contains("  String greeting(String name) => \"Hello $name\";"));
    assert_eq!(count(text, "extends S {"), 1, "only the default locale class");
    assert_eq!(count(text, "new Locale(\""), 1);
    assert!(text.contains("      new Locale(\"en\", \"\"),"));

    let written = fs::read_to_string(dir.path().join("lib/generated/i18n.dart")).unwrap();
    assert_eq!(&written, text);
    assert_eq!(generation.report.outcome, Outcome::Written);
}

#[test]
fn test_plural_suffix_without_other_is_plain() {
    let dir = project(&[("strings_en.arb", r#"{"itemsOne": "1 item"}"#)]);
    let text = run(dir.path(), RunMode::DryRun).text;

    assert!(text.contains("  String get itemsOne => \"1 item\";"));
    assert!(!text.contains("switch (count)"));
}

#[test]
fn test_plural_group_with_other() {
    let dir = project(&[(
        "strings_en.arb",
        r#"{"itemsOther": "N items", "itemsOne": "1 item"}"#,
    )]);
    let text = run(dir.path(), RunMode::DryRun).text;

    assert!(text.contains("  String items(String count) {\n    switch (count) {"));
    assert!(text.contains("      case \"1\":\n        return \"1 item\";"));
    assert!(text.contains("      default:\n        return \"N items\";"));
    assert_eq!(count(text.split("class en").next().unwrap(), "case \""), 1);
    assert!(!text.contains("itemsOne"));
    assert!(!text.contains("itemsOther"));
}

#[test]
fn test_legacy_hebrew_alias() {
    let dir = project(&[
        ("strings_en.arb", r#"{"title": "Title", "ok": "OK"}"#),
        ("strings_iw.arb", r#"{"title": "כותרת"}"#),
    ]);
    let generation = run(dir.path(), RunMode::DryRun);
    let text = &generation.text;

    assert!(text.contains("class iw extends S {"));
    assert!(text.contains(
        "class he_IL extends iw {\n  he_IL(Locale locale) : super(locale);\n\n  @override\n  TextDirection get textDirection => TextDirection.rtl;\n}"
    ));
    assert!(text.contains("      new Locale(\"iw\", \"\"),\n      new Locale(\"he\", \"IL\"),"));
    assert!(text.contains("      case \"iw\":"));
    assert!(text.contains("      case \"he_IL\":\n        return new SynchronousFuture<WidgetsLocalizations>(new he_IL(locale));"));

    let alias = generation.report.locale("he_IL").unwrap();
    assert_eq!(alias.alias_of.as_ref().unwrap().as_str(), "iw");
}

#[test]
fn test_malformed_locale_still_supported() {
    let dir = project(&[
        ("strings_en.arb", r#"{"title": "Title"}"#),
        ("strings_fr.arb", r#"{"title": "Titre""#),
    ]);
    let generation = run(dir.path(), RunMode::DryRun);
    let text = &generation.text;

    assert!(text.contains("class fr extends S {"));
    assert!(text.contains("      new Locale(\"fr\", \"\"),"));
    assert!(text.contains("      case \"fr\":"));
    assert!(!text.contains("Titre"));

    let fr = generation.report.locale("fr").unwrap();
    assert_eq!(fr.accessors(), 0);
    assert!(fr.malformed.is_some());
    assert_eq!(generation.report.issues.len(), 1);
}

#[test]
fn test_strict_mode_fails_on_malformed_locale() {
    let dir = project(&[
        ("strings_en.arb", r#"{"title": "Title"}"#),
        ("strings_fr.arb", "{oops}"),
    ]);
    let host = FsHost::new();
    let config = GeneratorConfig {
        strict: true,
        ..GeneratorConfig::default()
    };
    let result = Generator::new(&host, config)
        .verbose(false)
        .run(dir.path(), RunMode::Write);
    assert!(result.is_err());
    assert!(!dir.path().join("lib/generated/i18n.dart").exists());
}

#[test]
fn test_locale_only_ids_are_dropped() {
    let dir = project(&[
        ("strings_en.arb", r#"{"title": "Title"}"#),
        ("strings_de.arb", r#"{"title": "Titel", "onlyGerman": "Nur hier"}"#),
    ]);
    let generation = run(dir.path(), RunMode::DryRun);

    assert!(generation.text.contains("  @override\n  String get title => \"Titel\";"));
    assert!(!generation.text.contains("onlyGerman"));
    assert_eq!(
        generation.report.locale("de").unwrap().dropped,
        vec!["onlyGerman"]
    );
}

#[test]
fn test_default_file_created_when_missing() {
    let dir = project(&[("strings_de.arb", r#"{"title": "Titel"}"#)]);
    let generation = run(dir.path(), RunMode::Write);

    let created = dir.path().join("res/values/strings_en.arb");
    assert_eq!(fs::read_to_string(&created).unwrap(), "{}");
    assert_eq!(generation.report.created_default.as_deref(), Some(created.as_path()));

    // Default comes first and `de` has nothing to override.
    let tags: Vec<&str> = generation
        .report
        .locales
        .iter()
        .map(|l| l.tag.as_str())
        .collect();
    assert_eq!(tags, vec!["en", "de"]);
    assert!(!generation.text.contains("Titel"));
}

#[test]
fn test_check_mode_does_not_create_default_file() {
    let dir = project(&[("strings_de.arb", r#"{"title": "Titel"}"#)]);
    let generation = run(dir.path(), RunMode::Check);

    assert!(!dir.path().join("res/values/strings_en.arb").exists());
    assert_eq!(generation.report.created_default, None);
    assert_eq!(generation.report.outcome, Outcome::Stale);
}

#[test]
fn test_dry_run_leaves_empty_project_untouched() {
    let dir = TempDir::new().unwrap();
    let generation = run(dir.path(), RunMode::DryRun);

    assert!(!dir.path().join("res").exists());
    assert!(!dir.path().join("lib").exists());
    assert_eq!(generation.report.created_default, None);
    assert_eq!(generation.report.outcome, Outcome::NotWritten);
    assert!(generation.text.contains("class en extends S {"));
}

#[test]
fn test_empty_project_gets_values_folder_and_base_class() {
    let dir = TempDir::new().unwrap();
    let generation = run(dir.path(), RunMode::Write);

    assert!(dir.path().join("res/values/strings_en.arb").is_file());
    assert!(generation.text.contains("class S extends WidgetsLocalizations {"));
    assert!(generation.text.contains("class en extends S {"));
}

#[test]
fn test_rerun_is_byte_identical_and_unchanged() {
    let dir = project(&[
        ("strings_en.arb", r#"{"a": "A", "b": "B $x", "cOther": "$n cs", "cZero": "none"}"#),
        ("strings_pt_BR.arb", r#"{"a": "Á", "cOther": "$n cês"}"#),
        ("strings_ar.arb", r#"{"b": "ب $x"}"#),
    ]);
    let first = run(dir.path(), RunMode::Write);
    let second = run(dir.path(), RunMode::Write);

    assert_eq!(first.text, second.text);
    assert_eq!(first.report.fingerprint, second.report.fingerprint);
    assert_eq!(second.report.outcome, Outcome::Unchanged);

    let pt_br = first.text.split("class pt_BR extends S {").nth(1).unwrap();
    assert!(pt_br.starts_with(
        "\n  pt_BR(Locale locale) : super(locale);\n\n  @override\n  TextDirection get textDirection => TextDirection.ltr;\n\n  @override\n  String get a => \"Á\";\n  @override\n  String c(String n) {\n    switch (n) {\n      default:\n        return \"$n cês\";\n    }\n  }\n}"
    ), "got:\n{}", pt_br);

    let check = run(dir.path(), RunMode::Check);
    assert_eq!(check.report.outcome, Outcome::Unchanged);
}

#[test]
fn test_check_mode_detects_stale_output_without_writing() {
    let dir = project(&[("strings_en.arb", r#"{"a": "A"}"#)]);
    run(dir.path(), RunMode::Write);
    fs::write(
        dir.path().join("res/values/strings_en.arb"),
        r#"{"a": "A", "b": "B"}"#,
    )
    .unwrap();

    let output = dir.path().join("lib/generated/i18n.dart");
    let before = fs::read_to_string(&output).unwrap();
    let check = run(dir.path(), RunMode::Check);
    assert_eq!(check.report.outcome, Outcome::Stale);
    assert_eq!(fs::read_to_string(&output).unwrap(), before);
}

#[test]
fn test_locale_ordering_and_region_split() {
    let dir = project(&[
        ("strings_zh_Hant_TW.arb", "{}"),
        ("strings_pt_BR.arb", "{}"),
        ("strings_en.arb", "{}"),
        ("strings_de.arb", "{}"),
    ]);
    let text = run(dir.path(), RunMode::DryRun).text;

    let expected = "      new Locale(\"en\", \"\"),\n      new Locale(\"de\", \"\"),\n      new Locale(\"pt\", \"BR\"),\n      new Locale(\"zh\", \"\"),";
    assert!(text.contains(expected), "got:\n{}", text);
    assert!(text.contains("      case \"pt_BR\":"));
    assert!(text.contains("      case \"zh_Hant_TW\":"));
}

#[test]
fn test_config_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("arbgen.yaml"),
        "values_dir: i18n\noutput: lib/l10n.dart\ndefault_locale: de\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("i18n")).unwrap();
    fs::write(dir.path().join("i18n/strings_de.arb"), r#"{"hallo": "Hallo"}"#).unwrap();
    fs::write(dir.path().join("i18n/strings_en.arb"), r#"{"hallo": "Hello"}"#).unwrap();

    let host = FsHost::new();
    let config = GeneratorConfig::discover(dir.path()).unwrap();
    let generation = Generator::new(&host, config)
        .verbose(false)
        .run(dir.path(), RunMode::Write)
        .unwrap();

    assert!(dir.path().join("lib/l10n.dart").is_file());
    assert!(generation.text.contains("class de extends S {\n  de(Locale locale) : super(locale);\n}"));
    assert!(generation.text.contains("  @override\n  String get hallo => \"Hello\";"));
}
