use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::model::{Model, ProjectIdentity};

/// A template body paired with its identifier.
///
/// Bodies are loaded once at startup and shared by reference between
/// concurrent requests; cloning only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    id: String,
    body: Arc<str>,
}

impl TemplateSource {
    pub fn new(id: impl Into<String>, body: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Values a template is rendered against.
///
/// Project-level files see `project` and every `models`; per-model files see
/// `project` and a single `model`. Lives for one request only.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum GenerationContext<'a> {
    Project {
        project: &'a ProjectIdentity,
        models: &'a [Model],
    },
    Model {
        project: &'a ProjectIdentity,
        model: &'a Model,
    },
}

impl<'a> GenerationContext<'a> {
    pub fn project(project: &'a ProjectIdentity, models: &'a [Model]) -> Self {
        Self::Project { project, models }
    }

    pub fn model(project: &'a ProjectIdentity, model: &'a Model) -> Self {
        Self::Model { project, model }
    }

    pub fn identity(&self) -> &'a ProjectIdentity {
        match self {
            Self::Project { project, .. } | Self::Model { project, .. } => project,
        }
    }
}
