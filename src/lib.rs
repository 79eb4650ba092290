// SPDX-License-Identifier: PMPL-1.0-or-later

//! arbgen: Flutter localization accessors from ARB string files.
//!
//! Reads `strings_<tag>.arb` files (flat JSON objects) from a project's
//! values folder and generates one Dart unit containing:
//!
//! 1. **Base class `S`**: a getter or method for every default-locale string.
//! 2. **Locale classes**: one subclass per locale, overriding only the
//!    strings it defines that the default locale also defines.
//! 3. **Delegate**: supported locales, exact → language → fallback
//!    resolution, and a `switch` constructing the right locale class.
//!
//! ```
//! use arbgen::generate::render;
//! use arbgen::types::{LocaleTag, ResourceSet, StringTable};
//!
//! let mut en = StringTable::new();
//! en.insert("greeting".into(), "Hello $name".into());
//! let mut set = ResourceSet::new(LocaleTag::new("en"));
//! set.insert(LocaleTag::new("en"), en);
//!
//! let dart = render(&set, false).unwrap();
//! assert!(dart.contains("String greeting(String name) => \"Hello $name\";"));
//! ```

pub mod classify;
pub mod config;
pub mod emit;
pub mod generate;
pub mod host;
pub mod iso639;
pub mod loader;
pub mod report;
pub mod types;
