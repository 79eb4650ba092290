// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator configuration.
//!
//! Read from `arbgen.yaml`, `arbgen.yml` or `arbgen.json` in the project
//! root (or an explicit path). Every field has a default, so an empty file
//! or no file at all is a valid configuration.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File names probed in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["arbgen.yaml", "arbgen.yml", "arbgen.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Folder holding `strings_<tag>.<ext>`, relative to the project root.
    pub values_dir: PathBuf,
    /// Generated Dart unit, relative to the project root.
    pub output: PathBuf,
    pub default_locale: String,
    /// Resource file extension, without the dot.
    pub extension: String,
    /// Fail on a malformed resource file instead of skipping its strings.
    pub strict: bool,
    /// Classify locales on the rayon pool.
    pub parallel: bool,
    /// Formatter command run on the output, e.g. `["dart", "format"]`.
    pub formatter: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            values_dir: PathBuf::from("res/values"),
            output: PathBuf::from("lib/generated/i18n.dart"),
            default_locale: "en".to_string(),
            extension: "arb".to_string(),
            strict: false,
            parallel: true,
            formatter: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            Some("yaml") | Some("yml") => {
                if content.trim().is_empty() {
                    Self::default()
                } else {
                    serde_yaml::from_str(&content)
                        .with_context(|| format!("parsing yaml config {}", path.display()))?
                }
            }
            _ => {
                return Err(anyhow!(
                    "unsupported config extension for {}",
                    path.display()
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the first config file found in `project_root`, or the defaults.
    pub fn discover(project_root: &Path) -> Result<Self> {
        for name in CONFIG_FILE_NAMES {
            let candidate = project_root.join(name);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            anyhow::bail!("default_locale must not be empty");
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            anyhow::bail!(
                "extension must be given without a leading dot, got `{}`",
                self.extension
            );
        }
        Ok(())
    }

    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }
}
