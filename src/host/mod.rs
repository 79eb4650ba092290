// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host collaborator: the only place the generator touches the project.
//!
//! The pipeline needs six capabilities from its environment. [`FsHost`]
//! provides them on a plain filesystem; tests and embedders can swap in
//! their own implementation.

pub mod fs_host;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use fs_host::FsHost;

pub trait Host {
    /// Locate `relative` under `project_root`. A missing folder is created
    /// only when `create` is set.
    fn values_folder(&self, project_root: &Path, relative: &Path, create: bool)
        -> Result<PathBuf>;

    /// Direct children of `folder`, in no particular order. A missing folder
    /// has none.
    fn list_children(&self, folder: &Path) -> Result<Vec<PathBuf>>;

    fn read_bytes(&self, file: &Path) -> Result<Vec<u8>>;

    /// Create `file` with `contents`. An existing file is left untouched.
    fn create_file(&self, file: &Path, contents: &str) -> Result<()>;

    /// Current text of the generated unit, if there is one.
    fn read_output(&self, target: &Path) -> Result<Option<String>>;

    /// Replace the full text of the generated unit.
    fn overwrite(&self, target: &Path, text: &str) -> Result<()>;

    /// Reformat the generated unit in place.
    fn reformat(&self, target: &Path) -> Result<()>;
}
