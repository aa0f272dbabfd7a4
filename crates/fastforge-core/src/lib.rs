//! fastforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fastforge
//! backend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fastforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, StepFlow, preflight) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, CommandRunner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fastforge-adapters (Infrastructure)  │
//! │  (LocalFilesystem, SystemRunner, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectConfig, StructureSpec, Context) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fastforge_core::domain::ProjectConfig;
//!
//! let mut draft = ProjectConfig::builder();
//! draft.set_name("blog_api")?;
//! draft.set_use_database(true);
//! let config = draft.build()?;
//! assert!(config.use_docker());
//! # Ok::<(), fastforge_core::domain::DomainError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Generator, PostGenOptions, PostGenWarning, ScaffoldService, SetupStep, StepFlow,
        ports::{CommandRunner, Filesystem, ToolProbe},
    };
    pub use crate::domain::{
        DatabaseEnvironment, Linter, NameValidator, PackageManager, ProjectConfig,
        ProjectConfigBuilder, StructureSpec, TemplateContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
