// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flat JSON object parsing for resource files.

use crate::types::StringTable;
use indexmap::IndexMap;
use serde_json::value::RawValue;

/// Parse one resource file into a table.
///
/// Values keep their JSON spelling: string values lose only the enclosing
/// quotes, escapes such as `\"` stay as written because the generated Dart
/// string literal accepts them unchanged. Non-string values are kept as
/// their raw JSON text. The error is a human readable reason.
pub fn parse_table(bytes: &[u8]) -> Result<StringTable, String> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err("not valid UTF-8".to_string());
    }

    let raw: IndexMap<String, Box<RawValue>> =
        serde_json::from_str(&text).map_err(|e| e.to_string())?;

    Ok(raw
        .into_iter()
        .map(|(id, value)| (id, strip_quotes(value.get()).to_string()))
        .collect())
}

fn strip_quotes(raw: &str) -> &str {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order() {
        let table = parse_table(br#"{"zeta": "Z", "alpha": "A", "mid": "M"}"#).unwrap();
        let ids: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn escapes_pass_through_verbatim() {
        let table = parse_table(br#"{"quote": "Say \"hi\" to $name\n"}"#).unwrap();
        assert_eq!(table["quote"], r#"Say \"hi\" to $name\n"#);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"{"a": "b"}"#);
        assert_eq!(parse_table(&bytes).unwrap()["a"], "b");
    }

    #[test]
    fn non_string_values_keep_raw_text() {
        let table = parse_table(br#"{"n": 3, "flag": true}"#).unwrap();
        assert_eq!(table["n"], "3");
        assert_eq!(table["flag"], "true");
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(parse_table(br#"{"a": "b""#).is_err());
        assert!(parse_table(br#"{"a": "b"} trailing"#).is_err());
        assert!(parse_table(br#"["a", "b"]"#).is_err());
        assert!(parse_table(&[0xFF, 0xFE, 0x00]).is_err());
    }

    #[test]
    fn empty_object_is_an_empty_table() {
        assert!(parse_table(b"{}").unwrap().is_empty());
    }
}
