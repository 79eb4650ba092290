// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language codes accepted in locale tags.
//!
//! Android and older JDKs still report a few withdrawn codes (`iw` for
//! Hebrew, `ji` for Yiddish, `in` for Indonesian), so those count as known
//! too.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Two-letter codes, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Withdrawn codes still seen in device locales.
pub const LEGACY_CODES: &[&str] = &["in", "iw", "ji"];

/// Whether `code` is an ISO 639-1 code or a legacy alias of one.
///
/// Case-sensitive: locale tags use lowercase language codes.
pub fn is_known_language(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok() || LEGACY_CODES.contains(&code)
}
