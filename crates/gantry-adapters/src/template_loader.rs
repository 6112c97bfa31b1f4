//! Filesystem-based template overrides.
//!
//! A directory of `<id>.tmpl` files replaces the matching built-in bodies:
//!
//! ```text
//! my-templates/
//! ├── handler.tmpl   ← replaces the built-in "handler"
//! └── readme.tmpl    ← replaces the built-in "readme"
//! ```
//!
//! Files whose stem is not a known template id are skipped with a warning.
//! Subdirectories are not searched.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use gantry_core::{
    domain::TemplateSource,
    error::{GantryError, GantryResult},
};

use crate::builtin_templates;

const EXTENSION: &str = "tmpl";

/// Reads override templates from one directory.
#[derive(Debug, Clone)]
pub struct OverrideLoader {
    root: PathBuf,
}

impl OverrideLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every recognised override, sorted by file name.
    ///
    /// A missing or unreadable directory is a configuration error.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_all(&self) -> GantryResult<Vec<TemplateSource>> {
        if !self.root.is_dir() {
            return Err(GantryError::Configuration {
                message: format!(
                    "template override directory not found: {}",
                    self.root.display()
                ),
            });
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| GantryError::Configuration {
                message: format!("cannot read {}: {e}", self.root.display()),
            })?;
            let path = entry.path();

            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION)
            {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !builtin_templates::is_known(id) {
                warn!(path = %path.display(), "ignoring override for unknown template id");
                continue;
            }

            let body = std::fs::read_to_string(path).map_err(|e| GantryError::Configuration {
                message: format!("cannot read template {}: {e}", path.display()),
            })?;
            debug!(id, bytes = body.len(), "override loaded");
            templates.push(TemplateSource::new(id, body));
        }

        Ok(templates)
    }
}
