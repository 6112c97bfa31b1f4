//! Generation Service - the end-to-end request pipeline.
//!
//! parse → stage → scaffold → archive → cleanup.
//!
//! Each call owns its own staging directory, so concurrent calls on a
//! shared service never see each other's files. Every failure is returned
//! as a [`GantryError`](crate::error::GantryError) carrying its stage.

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, ScaffoldService,
        ports::{Archiver, Filesystem, TemplateRenderer, TemplateStore},
        staging::StagingTree,
    },
    domain::{Diagnostic, DslParser, ProjectIdentity, ProjectStructure},
    error::GantryResult,
};

const STAGING_PREFIX: &str = "gantry";

/// Input of one generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub project: ProjectIdentity,
    /// Raw model DSL text.
    pub models_text: String,
    /// Reject the request when parsing produced any diagnostic.
    pub strict: bool,
}

impl GenerationRequest {
    pub fn new(project: ProjectIdentity, models_text: impl Into<String>) -> Self {
        Self {
            project,
            models_text: models_text.into(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Successful output of a generation request.
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    /// Suggested download name, `<project>.zip`.
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Number of files packaged.
    pub entry_count: usize,
    /// Lines and blocks the parser skipped or adjusted.
    pub diagnostics: Vec<Diagnostic>,
}

/// Orchestrates a full generation request.
pub struct GenerationService {
    parser: DslParser,
    scaffolder: ScaffoldService,
    archiver: Box<dyn Archiver>,
}

impl GenerationService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        archiver: Box<dyn Archiver>,
    ) -> Self {
        Self {
            parser: DslParser::new(),
            scaffolder: ScaffoldService::new(store, renderer, filesystem),
            archiver,
        }
    }

    pub fn with_parser(mut self, parser: DslParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn parser(&self) -> &DslParser {
        &self.parser
    }

    /// Run the whole pipeline and return the archive bytes.
    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), project = %request.project.name())
    )]
    pub fn generate(&self, request: &GenerationRequest) -> GantryResult<GeneratedArchive> {
        let outcome = self.parser.parse(&request.models_text);
        for diagnostic in &outcome.diagnostics {
            warn!(%diagnostic, "Model definition adjusted");
        }
        if request.strict && !outcome.is_clean() {
            return Err(ApplicationError::StrictModeViolation {
                count: outcome.diagnostics.len(),
            }
            .into());
        }
        info!(models = outcome.models.len(), "Models parsed");

        let staging = StagingTree::create(self.scaffolder.filesystem(), STAGING_PREFIX)?;
        let structure =
            self.scaffolder
                .scaffold(&request.project, &outcome.models, staging.root())?;
        let packed = self.archiver.archive(staging.root())?;
        debug!(bytes = packed.bytes.len(), entries = packed.entries, "Archive built");

        if packed.entries != structure.file_count() {
            return Err(ApplicationError::ArchiveFailed {
                path: staging.root().to_path_buf(),
                reason: format!(
                    "archive holds {} files but {} were written",
                    packed.entries,
                    structure.file_count()
                ),
            }
            .into());
        }

        Ok(GeneratedArchive {
            filename: request.project.archive_filename(),
            bytes: packed.bytes,
            entry_count: packed.entries,
            diagnostics: outcome.diagnostics,
        })
    }

    /// Parse and render in memory only; nothing is staged or archived.
    pub fn preview(
        &self,
        request: &GenerationRequest,
    ) -> GantryResult<(ProjectStructure, Vec<Diagnostic>)> {
        let outcome = self.parser.parse(&request.models_text);
        let structure = self.scaffolder.plan(&request.project, &outcome.models)?;
        Ok((structure, outcome.diagnostics))
    }
}
