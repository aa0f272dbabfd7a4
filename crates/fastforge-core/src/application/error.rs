//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Target directory is already taken.
    #[error("Directory '{path}' already exists")]
    ProjectExists { path: PathBuf },

    /// A required external tool is missing.
    #[error("{tool} is not installed")]
    DependencyMissing { tool: String, suggestion: String },

    /// Writing the project tree failed; `path` is project-relative.
    #[error("Generation failed at {path}: {reason}")]
    GenerationFailed { path: PathBuf, reason: String },

    /// Raw filesystem operation failed outside generation.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The current directory is not a scaffolded FastAPI project.
    #[error("Not in a valid FastAPI project directory: {reason}")]
    NotAProject { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name or remove the existing directory".into(),
            ],
            Self::DependencyMissing { tool, suggestion } => vec![
                format!("Install {}: {}", tool, suggestion),
            ],
            Self::GenerationFailed { path, .. } => vec![
                format!("Failed while writing: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partially generated files were left in place".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::NotAProject { .. } => vec![
                "Run this command from the root of a project created with 'fastforge init'"
                    .into(),
                "Expected an app/main.py entry point and a FastAPI dependency in pyproject.toml"
                    .into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::DependencyMissing { .. } => ErrorCategory::NotFound,
            Self::NotAProject { .. } => ErrorCategory::Validation,
            Self::GenerationFailed { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
