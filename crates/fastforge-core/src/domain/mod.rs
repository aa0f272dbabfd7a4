//! Core domain layer for fastforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (filesystem, subprocesses) is handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: [`ProjectConfig`] is read-only once built
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    project_config::{DEFAULT_PYTHON_VERSION, ProjectConfig, ProjectConfigBuilder},
    render::{ContextValue, TemplateContext},
    structure::{FileContent, StructureNode, StructureSpec},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::NameValidator;

pub use value_objects::{DatabaseEnvironment, Linter, PackageManager};
