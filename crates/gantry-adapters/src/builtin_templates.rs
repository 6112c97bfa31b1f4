//! Templates compiled into the binary.
//!
//! One body per blueprint template id, embedded with `include_str!` from the
//! crate's `templates/` directory. They describe a Gin + GORM (MySQL) REST
//! API; context variables are `project`, and either `models` (project files)
//! or `model` (per-model files).

use gantry_core::domain::TemplateSource;

const BUILTIN: &[(&str, &str)] = &[
    ("main", include_str!("../templates/main.tmpl")),
    ("config", include_str!("../templates/config.tmpl")),
    ("database", include_str!("../templates/database.tmpl")),
    ("server", include_str!("../templates/server.tmpl")),
    ("logger", include_str!("../templates/logger.tmpl")),
    ("env", include_str!("../templates/env.tmpl")),
    ("gomod", include_str!("../templates/gomod.tmpl")),
    ("readme", include_str!("../templates/readme.tmpl")),
    ("dockerfile", include_str!("../templates/dockerfile.tmpl")),
    ("gitignore", include_str!("../templates/gitignore.tmpl")),
    ("model", include_str!("../templates/model.tmpl")),
    ("handler", include_str!("../templates/handler.tmpl")),
    ("apispec", include_str!("../templates/apispec.tmpl")),
];

/// All built-in templates, in blueprint order.
pub fn all_templates() -> impl Iterator<Item = TemplateSource> {
    BUILTIN.iter().map(|(id, body)| TemplateSource::new(*id, *body))
}

/// Whether `id` names a built-in template.
pub fn is_known(id: &str) -> bool {
    BUILTIN.iter().any(|(known, _)| *known == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::domain::{ModelArtifact, ProjectArtifact};

    #[test]
    fn every_blueprint_id_has_a_body() {
        let ids = ProjectArtifact::ALL
            .iter()
            .map(|a| a.template_id())
            .chain(ModelArtifact::ALL.iter().map(|a| a.template_id()));

        for id in ids {
            assert!(is_known(id), "no built-in template for {id}");
        }
        assert_eq!(all_templates().count(), 13);
    }

    #[test]
    fn bodies_are_not_empty() {
        assert!(all_templates().all(|t| !t.body().trim().is_empty()));
    }
}
