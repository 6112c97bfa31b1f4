//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gantry-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and staging directories
//!   - `TemplateStore`: Template body lookup
//!   - `TemplateRenderer`: Template rendering
//!   - `Archiver`: Packaging a finished tree
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Archiver, Filesystem, PackedArchive, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockArchiver, MockTemplateStore};
