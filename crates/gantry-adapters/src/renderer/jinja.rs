//! Template rendering with minijinja.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{instrument, trace};

use gantry_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{GenerationContext, TemplateSource},
    error::GantryResult,
};

/// Renders template bodies with a shared, read-only minijinja environment.
///
/// Undefined variables are errors, block tags do not leave blank lines
/// behind, output is never HTML-escaped, and a trailing newline is kept.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("openapi_type", openapi_type);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip_all, fields(template = %template.id()))]
    fn render(
        &self,
        template: &TemplateSource,
        context: &GenerationContext<'_>,
    ) -> GantryResult<Vec<u8>> {
        let rendered = self
            .env
            .render_named_str(template.id(), template.body(), context)
            .map_err(|e| ApplicationError::RenderingFailed {
                template: template.id().to_string(),
                reason: e.to_string(),
            })?;

        trace!(bytes = rendered.len(), "Template rendered");
        Ok(rendered.into_bytes())
    }
}

/// Map a Go field type to an OpenAPI schema type.
fn openapi_type(go_type: &str) -> String {
    let ty = go_type.trim_start_matches('*');
    let mapped = match ty {
        "bool" => "boolean",
        "float32" | "float64" => "number",
        t if t.starts_with("int") || t.starts_with("uint") => "integer",
        t if t.starts_with("[]") => "array",
        _ => "string",
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{
        domain::{Model, ModelField, ProjectIdentity},
        error::GantryError,
    };

    fn project() -> ProjectIdentity {
        ProjectIdentity::new("demo", "github.com/acme/demo", "9000")
    }

    fn render(body: &str, context: &GenerationContext<'_>) -> GantryResult<String> {
        MiniJinjaRenderer::new()
            .render(&TemplateSource::new("t", body), context)
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn project_context_exposes_identity_and_models() {
        let models = vec![Model::new("Book", vec![]), Model::new("Category", vec![])];
        let project = project();
        let ctx = GenerationContext::project(&project, &models);

        let out = render(
            "{{ project.module_path }}:{{ project.port }}\n{% for m in models %}{{ m.plural_name }} {% endfor %}",
            &ctx,
        )
        .unwrap();

        assert_eq!(out, "github.com/acme/demo:9000\nBooks Categories ");
    }

    #[test]
    fn model_context_exposes_fields() {
        let model = Model::new(
            "UserProfile",
            vec![ModelField::new("Bio", "string").required(true)],
        );
        let project = project();
        let ctx = GenerationContext::model(&project, &model);

        let out = render(
            "{{ model.snake_name }} {{ model.lower_initial_name }}\n{% for f in model.fields %}{{ f.name }} {{ f.type }} {{ f.serialization_tag }} {{ f.persistence_tag }} {{ f.required }}{% endfor %}",
            &ctx,
        )
        .unwrap();

        assert_eq!(out, "user_profile userProfile\nBio string bio column:bio true");
    }

    #[test]
    fn undefined_variable_is_a_rendering_failure() {
        let model = Model::new("Book", vec![]);
        let project = project();
        let ctx = GenerationContext::model(&project, &model);

        let err = render("{{ models }}", &ctx).unwrap_err();
        assert!(matches!(
            err,
            GantryError::Application(ApplicationError::RenderingFailed { ref template, .. })
                if template == "t"
        ));
    }

    #[test]
    fn syntax_error_is_a_rendering_failure() {
        let project = project();
        let ctx = GenerationContext::project(&project, &[]);
        assert!(render("{% if %}", &ctx).is_err());
    }

    #[test]
    fn output_is_not_escaped() {
        let project = ProjectIdentity::new("a<b>", "m", "1");
        let ctx = GenerationContext::project(&project, &[]);
        assert_eq!(render("{{ project.name }}", &ctx).unwrap(), "a<b>");
    }

    #[test]
    fn openapi_type_mapping() {
        assert_eq!(openapi_type("string"), "string");
        assert_eq!(openapi_type("int64"), "integer");
        assert_eq!(openapi_type("uint"), "integer");
        assert_eq!(openapi_type("float64"), "number");
        assert_eq!(openapi_type("bool"), "boolean");
        assert_eq!(openapi_type("*bool"), "boolean");
        assert_eq!(openapi_type("[]string"), "array");
        assert_eq!(openapi_type("time.Time"), "string");
    }
}
