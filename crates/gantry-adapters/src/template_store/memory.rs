//! In-memory template store with built-in templates.

use std::{collections::HashMap, path::Path, sync::Arc};

use tracing::info;

use gantry_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateSource,
    error::GantryResult,
};

use crate::{builtin_templates, template_loader::OverrideLoader};

/// Template store populated at startup and read-only afterwards.
///
/// Bodies are `Arc<str>`, so lookups and clones never copy template text and
/// concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    templates: HashMap<String, TemplateSource>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in templates loaded.
    pub fn with_builtin() -> Self {
        let mut store = Self::new();
        for template in builtin_templates::all_templates() {
            store.insert(template);
        }
        store
    }

    /// Replace bodies with the `<id>.tmpl` files found in `dir`.
    ///
    /// Returns the number of templates replaced.
    pub fn load_overrides(&mut self, dir: &Path) -> GantryResult<usize> {
        let overrides = OverrideLoader::new(dir).load_all()?;
        let count = overrides.len();
        for template in overrides {
            self.insert(template);
        }
        info!(dir = %dir.display(), count, "Template overrides applied");
        Ok(count)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, template: TemplateSource) {
        self.templates.insert(template.id().to_string(), template);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &str) -> GantryResult<TemplateSource> {
        self.templates.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound { id: id.to_string() }.into()
        })
    }

    fn list(&self) -> GantryResult<Vec<TemplateSource>> {
        let mut all: Vec<_> = self.templates.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}
