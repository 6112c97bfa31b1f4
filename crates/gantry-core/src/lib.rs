//! Gantry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Gantry, a
//! generator that turns a small model DSL into a zipped Go REST API project.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            gantry-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (GenerationService, ScaffoldService,    │
//! │  TemplateService)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Store, Renderer, Filesystem, Archiver) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gantry-adapters (Infrastructure)    │
//! │ (InMemoryStore, MiniJinjaRenderer,      │
//! │  LocalFilesystem, ZipArchiver)          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Domain Layer (Pure Logic)      │
//! │ (DslParser, Model, blueprint, inflector)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gantry_core::prelude::*;
//!
//! let service = GenerationService::new(store, renderer, filesystem, archiver);
//! let request = GenerationRequest::new(
//!     ProjectIdentity::new("bookstore", "github.com/acme/bookstore", "8080"),
//!     "Book\nTitle string required\nPrice float64",
//! );
//! let archive = service.generate(&request)?;
//! std::fs::write(&archive.filename, &archive.bytes)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedArchive, GenerationRequest, GenerationService, ScaffoldService, TemplateService,
        ports::{Archiver, Filesystem, PackedArchive, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Diagnostic, DslParser, GenerationContext, Model, ModelField, ParseOutcome,
        ProjectIdentity, ProjectStructure, RequiredRule, TemplateSource,
    };
    pub use crate::error::{GantryError, GantryResult, Stage};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
