use serde::Serialize;
use std::fmt;

use crate::domain::inflector::{lower_initial, pluralize, snake_case};

/// Identity of the project being generated.
///
/// Supplied entirely by the caller and never modified afterwards. The module
/// path is accepted as-is; it is only ever substituted into templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    name: String,
    module_path: String,
    port: String,
}

impl ProjectIdentity {
    pub fn new(
        name: impl Into<String>,
        module_path: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            port: port.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Suggested download name for the generated archive.
    pub fn archive_filename(&self) -> String {
        format!("{}.zip", self.name)
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) :{}", self.name, self.module_path, self.port)
    }
}

/// One typed field of a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// Key used in exchanged payloads: the lowercased field name.
    pub serialization_tag: String,
    /// Storage column hint, `column:<snake(name)>` unless overridden.
    pub persistence_tag: String,
    pub required: bool,
}

impl ModelField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            serialization_tag: name.to_lowercase(),
            persistence_tag: format!("column:{}", snake_case(&name)),
            field_type: field_type.into(),
            required: false,
            name,
        }
    }

    pub fn with_persistence_tag(mut self, tag: impl Into<String>) -> Self {
        self.persistence_tag = tag.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// A named entity parsed from the model DSL.
///
/// The derived names are computed once here and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    name: String,
    fields: Vec<ModelField>,
    snake_name: String,
    lower_initial_name: String,
    plural_name: String,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<ModelField>) -> Self {
        let name = name.into();
        Self {
            snake_name: snake_case(&name),
            lower_initial_name: lower_initial(&name),
            plural_name: pluralize(&name),
            fields,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ModelField] {
        &self.fields
    }

    pub fn snake_name(&self) -> &str {
        &self.snake_name
    }

    pub fn lower_initial_name(&self) -> &str {
        &self.lower_initial_name
    }

    pub fn plural_name(&self) -> &str {
        &self.plural_name
    }
}
