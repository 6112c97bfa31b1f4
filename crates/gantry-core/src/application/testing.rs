//! Hand-written port fakes shared by the application tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{GenerationContext, ModelArtifact, ProjectArtifact, TemplateSource},
    error::GantryResult,
};

#[derive(Default)]
struct FakeFsState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    writes: Vec<PathBuf>,
}

/// In-memory filesystem that records write order and can fail on demand.
#[derive(Default)]
pub struct FakeFilesystem {
    state: Mutex<FakeFsState>,
    counter: AtomicUsize,
    fail_on: Option<PathBuf>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any write whose path ends with `suffix`.
    pub fn failing_on(suffix: impl Into<PathBuf>) -> Self {
        Self {
            fail_on: Some(suffix.into()),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()> {
        if self.fail_on.as_ref().is_some_and(|s| path.ends_with(s)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        let mut state = self.state.lock().unwrap();
        let parent = path.parent().unwrap_or(Path::new(""));
        if !state.dirs.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        state.writes.push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut state = self.state.lock().unwrap();
        state.dirs.retain(|p| !p.starts_with(path));
        state.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let root = PathBuf::from(format!("/staging/{prefix}-{n}"));
        self.create_dir_all(&root)?;
        Ok(root)
    }
}

/// Store serving a trivial body for every blueprint template id.
pub struct FakeStore;

impl TemplateStore for FakeStore {
    fn get(&self, id: &str) -> GantryResult<TemplateSource> {
        Ok(TemplateSource::new(id, format!("template {id}")))
    }

    fn list(&self) -> GantryResult<Vec<TemplateSource>> {
        ProjectArtifact::ALL
            .iter()
            .map(|a| a.template_id())
            .chain(ModelArtifact::ALL.iter().map(|a| a.template_id()))
            .map(|id| self.get(id))
            .collect()
    }
}

/// Renderer writing `<template id>|<project>|<model or model count>`.
#[derive(Default)]
pub struct EchoRenderer {
    pub fail_template: Option<&'static str>,
}

impl TemplateRenderer for EchoRenderer {
    fn render(
        &self,
        template: &TemplateSource,
        context: &GenerationContext<'_>,
    ) -> GantryResult<Vec<u8>> {
        if self.fail_template == Some(template.id()) {
            return Err(ApplicationError::RenderingFailed {
                template: template.id().into(),
                reason: "injected failure".into(),
            }
            .into());
        }
        let scope = match context {
            GenerationContext::Project { models, .. } => format!("{} models", models.len()),
            GenerationContext::Model { model, .. } => model.name().to_string(),
        };
        Ok(format!("{}|{}|{}", template.id(), context.identity().name(), scope).into_bytes())
    }
}

// Lets a test keep a handle on a filesystem the service owns.
impl Filesystem for std::sync::Arc<FakeFilesystem> {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        self.as_ref().create_dir_all(path)
    }
    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()> {
        self.as_ref().write_file(path, content)
    }
    fn exists(&self, path: &Path) -> bool {
        self.as_ref().exists(path)
    }
    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        self.as_ref().remove_dir_all(path)
    }
    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf> {
        self.as_ref().create_staging_dir(prefix)
    }
}
