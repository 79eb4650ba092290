// SPDX-License-Identifier: PMPL-1.0-or-later

//! Placeholder scanning for template text.
//!
//! A placeholder is `$name` or `${name}`. Names are Dart identifiers: a
//! letter or `_` followed by letters, digits and `_`, so `$5` is not a
//! placeholder. Han, Hiragana and Katakana characters end a name so that
//! `$count個` yields `count`.
//!
//! An odd run of backslashes before `$` makes it a literal dollar sign. Text
//! loaded from a resource file cannot produce that (JSON has no `\$` escape
//! and values keep their raw escapes, so backslashes arrive in pairs); it only
//! matters for tables built in memory.

use regex::Regex;
use std::sync::OnceLock;

/// Character that opens a placeholder.
pub const MARKER: char = '$';

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\$(?:\{([\p{L}_][\p{L}\p{N}_]*)\}|([\p{L}_--[\p{Han}\p{Hiragana}\p{Katakana}]][\p{L}\p{N}_--[\p{Han}\p{Hiragana}\p{Katakana}]]*))",
        )
        .expect("placeholder pattern is valid")
    })
}

/// Whether the template has to become a method rather than a getter.
pub fn has_marker(text: &str) -> bool {
    text.contains(MARKER)
}

/// Distinct placeholder names in order of first appearance.
pub fn extract_parameters(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(text) {
        let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
        if is_escaped(text, whole) {
            continue;
        }
        let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if !names.iter().any(|n| n == name.as_str()) {
            names.push(name.as_str().to_string());
        }
    }
    names
}

/// First placeholder name, used as the plural switch parameter.
pub fn first_parameter(text: &str) -> Option<String> {
    extract_parameters(text).into_iter().next()
}

/// An odd run of backslashes before `pos` escapes the marker.
fn is_escaped(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .rev()
        .take_while(|c| *c == '\\')
        .count()
        % 2
        == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_in_first_seen_order() {
        assert_eq!(
            extract_parameters("$greeting, $name! Bye $name."),
            vec!["greeting", "name"]
        );
    }

    #[test]
    fn braced_form() {
        assert_eq!(extract_parameters("${count}items"), vec!["count"]);
    }

    #[test]
    fn punctuation_and_whitespace_end_names() {
        assert_eq!(extract_parameters("Hi $first-$last."), vec!["first", "last"]);
        assert_eq!(extract_parameters("$user_name joined"), vec!["user_name"]);
    }

    #[test]
    fn cjk_text_is_not_part_of_a_name() {
        assert_eq!(extract_parameters("$count個のアイテム"), vec!["count"]);
        assert_eq!(extract_parameters("$nameさん"), vec!["name"]);
        assert_eq!(extract_parameters("$nameカード"), vec!["name"]);
    }

    #[test]
    fn lone_and_escaped_markers_are_skipped() {
        assert!(extract_parameters("Costs $ 5").is_empty());
        assert!(extract_parameters(r"Costs \$5").is_empty());
        assert_eq!(extract_parameters(r"\\$amount"), vec!["amount"]);
        assert!(has_marker("Costs $ 5"));
        assert!(!has_marker("Plain"));
    }

    #[test]
    fn names_cannot_start_with_a_digit() {
        assert!(extract_parameters("$5 off").is_empty());
        assert!(extract_parameters("${5}").is_empty());
        assert_eq!(extract_parameters("$_n and $v2"), vec!["_n", "v2"]);
        assert!(has_marker("$5 off"));
    }

    #[test]
    fn backslashes_from_json_arrive_in_pairs() {
        let table = crate::loader::parse_table(br#"{"price": "Costs \\$amount"}"#).unwrap();
        assert_eq!(extract_parameters(&table["price"]), vec!["amount"]);
    }

    #[test]
    fn first_parameter_of_template() {
        assert_eq!(first_parameter("$howMany songs by $artist").as_deref(), Some("howMany"));
        assert_eq!(first_parameter("No songs"), None);
    }
}
