pub mod model;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use model::{Model, ModelField, ProjectIdentity};
pub use project_structure::ProjectStructure;
pub use template::{GenerationContext, TemplateSource};
