//! Application services - orchestrate use cases.
//!
//! `GenerationService` runs a whole request; `ScaffoldService` renders and
//! writes a tree; `TemplateService` answers catalogue queries.

pub mod generation_service;
pub mod scaffold_service;
pub mod template_service;

pub use generation_service::{GeneratedArchive, GenerationRequest, GenerationService};
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateScope, TemplateService};
