//! Scaffold Service - renders and materializes a project tree.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Lay out the fixed skeleton directories
//! 2. Render project-level artifacts against every model
//! 3. Render the per-model artifacts, in model order
//! 4. Write the tree under a root, creating parents before each file
//!
//! Any failure aborts the whole run and is returned to the caller.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{
        DomainValidator as validator, FsEntry, GenerationContext, Model, ModelArtifact,
        ProjectArtifact, ProjectIdentity, ProjectStructure, SKELETON_DIRS,
    },
    error::GantryResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use gantry_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render the full project tree in memory without touching the filesystem.
    #[instrument(skip_all, fields(project = %project.name(), models = models.len()))]
    pub fn plan(&self, project: &ProjectIdentity, models: &[Model]) -> GantryResult<ProjectStructure> {
        let mut structure = ProjectStructure::new();

        for dir in SKELETON_DIRS {
            structure.add_directory(dir);
        }

        let context = GenerationContext::project(project, models);
        for artifact in ProjectArtifact::ALL {
            let content = self.render(artifact.template_id(), &context)?;
            structure.add_file(artifact.path(), content);
        }

        for model in models {
            let context = GenerationContext::model(project, model);
            for artifact in ModelArtifact::ALL {
                let content = self.render(artifact.template_id(), &context)?;
                structure.add_file(artifact.path(model.snake_name()), content);
            }
        }

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Render the project and write it under `root`.
    ///
    /// Returns the structure that was written.
    #[instrument(skip_all, fields(project = %project.name(), root = %root.display()))]
    pub fn scaffold(
        &self,
        project: &ProjectIdentity,
        models: &[Model],
        root: &Path,
    ) -> GantryResult<ProjectStructure> {
        let structure = self.plan(project, models)?;
        self.write_all(&structure, root)?;

        info!(files = structure.file_count(), "Scaffold completed");
        Ok(structure)
    }

    pub(crate) fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, template_id: &str, context: &GenerationContext<'_>) -> GantryResult<Vec<u8>> {
        let template = self.store.get(template_id)?;
        self.renderer.render(&template, context)
    }

    /// Write all entries in the structure, in order.
    fn write_all(&self, structure: &ProjectStructure, root: &Path) -> GantryResult<()> {
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %file.path.display(), bytes = file.size(), "File written");
                }
            }
        }

        Ok(())
    }
}
