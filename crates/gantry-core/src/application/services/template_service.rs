//! Template Service - template catalogue queries.
//!
//! Joins the template bodies held by the store with the blueprint that says
//! where each one lands in a generated project.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{ModelArtifact, ProjectArtifact, TemplateSource},
    error::GantryResult,
};

/// Whether a template renders once per project or once per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateScope {
    Project,
    Model,
}

/// Catalogue entry for one template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub scope: TemplateScope,
    /// Output path; `{}` stands for the model's snake-case name.
    pub output_path: String,
    /// Body length in bytes.
    pub size: usize,
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by id.
    pub fn get(&self, id: &str) -> GantryResult<TemplateSource> {
        self.store.get(id)
    }

    /// Every template a generated project uses, project scope first.
    pub fn catalogue(&self) -> GantryResult<Vec<TemplateInfo>> {
        let project = ProjectArtifact::ALL.iter().map(|a| {
            (a.template_id(), TemplateScope::Project, a.path().to_string())
        });
        let model = ModelArtifact::ALL.iter().map(|a| {
            (a.template_id(), TemplateScope::Model, a.path_pattern().to_string())
        });

        project
            .chain(model)
            .map(|(id, scope, output_path)| {
                let source = self.store.get(id)?;
                Ok(TemplateInfo {
                    id: id.to_string(),
                    scope,
                    output_path,
                    size: source.body().len(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockTemplateStore, testing::FakeStore},
        error::GantryError,
    };

    #[test]
    fn catalogue_lists_every_blueprint_template() {
        let service = TemplateService::new(Box::new(FakeStore));
        let catalogue = service.catalogue().unwrap();

        assert_eq!(catalogue.len(), 13);
        assert_eq!(catalogue[0].id, "main");
        assert_eq!(catalogue[0].output_path, "cmd/main.go");
        assert_eq!(catalogue[0].size, "template main".len());

        let handler = catalogue.iter().find(|t| t.id == "handler").unwrap();
        assert_eq!(handler.scope, TemplateScope::Model);
        assert_eq!(handler.output_path, "pkg/handlers/{}.go");
    }

    #[test]
    fn catalogue_fails_when_a_template_is_missing() {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|id| match id {
            "dockerfile" => Err(ApplicationError::TemplateNotFound { id: id.into() }.into()),
            _ => Ok(TemplateSource::new(id, "x")),
        });

        let err = TemplateService::new(Box::new(store)).catalogue().unwrap_err();
        assert!(matches!(
            err,
            GantryError::Application(ApplicationError::TemplateNotFound { ref id }) if id == "dockerfile"
        ));
    }
}
