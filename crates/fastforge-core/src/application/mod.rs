//! Application layer for fastforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, StepFlow, preflight)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CollectOutcome, DependencyValidator, FlowProgress, Generator, PostGenOptions, PostGenWarning,
    ScaffoldService, SetupStep, StepFlow, ToolStatus, ensure_env_file, ensure_target_available,
    materialize,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, ToolProbe};

pub use error::ApplicationError;
