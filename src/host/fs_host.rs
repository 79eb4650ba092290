// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filesystem host with an optional external formatter.

use super::Host;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Default)]
pub struct FsHost {
    /// Program and leading arguments; the output path is appended.
    formatter: Vec<String>,
}

impl FsHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(formatter: Vec<String>) -> Self {
        Self { formatter }
    }
}

impl Host for FsHost {
    fn values_folder(
        &self,
        project_root: &Path,
        relative: &Path,
        create: bool,
    ) -> Result<PathBuf> {
        if !project_root.is_dir() {
            anyhow::bail!("Project root is not a directory: {}", project_root.display());
        }
        let folder = project_root.join(relative);
        if create {
            fs::create_dir_all(&folder)
                .with_context(|| format!("creating values folder {}", folder.display()))?;
        }
        Ok(folder)
    }

    fn list_children(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("listing {}", folder.display())),
        };
        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect())
    }

    fn read_bytes(&self, file: &Path) -> Result<Vec<u8>> {
        fs::read(file).with_context(|| format!("reading {}", file.display()))
    }

    fn create_file(&self, file: &Path, contents: &str) -> Result<()> {
        if file.exists() {
            return Ok(());
        }
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(file, contents).with_context(|| format!("creating {}", file.display()))
    }

    fn read_output(&self, target: &Path) -> Result<Option<String>> {
        match fs::read_to_string(target) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", target.display())),
        }
    }

    fn overwrite(&self, target: &Path, text: &str) -> Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(target, text).with_context(|| format!("writing {}", target.display()))
    }

    fn reformat(&self, target: &Path) -> Result<()> {
        let Some((program, args)) = self.formatter.split_first() else {
            return Ok(());
        };

        let output = Command::new(program)
            .args(args)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run formatter `{}`", program))?;

        if !output.status.success() {
            return Err(anyhow!(
                "formatter `{}` exited with {:?}: {}",
                program,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(())
    }
}
