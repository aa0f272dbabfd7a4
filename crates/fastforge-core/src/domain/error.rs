use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project name errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("'{name}' is a Python keyword and cannot be used as a project name")]
    ReservedName { name: String },

    #[error("'{name}' is not a valid project name")]
    InvalidProjectName { name: String },

    #[error("Project name is too long (max {max} characters)")]
    NameTooLong { max: usize },

    // ========================================================================
    // Structure errors
    // ========================================================================
    #[error("Duplicate entry in structure: {name}")]
    DuplicateEntry { name: String },

    #[error("Invalid entry name in structure: {name}")]
    InvalidEntryName { name: String },

    // ========================================================================
    // Constraint violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => {
                vec!["Provide a valid project name in snake_case format".into()]
            }
            Self::ReservedName { .. } => {
                vec!["Python keywords cannot be used; choose a different name".into()]
            }
            Self::InvalidProjectName { .. } => vec![
                "Project name must start with a lowercase letter and contain only \
                 lowercase letters, numbers, and underscores (snake_case)"
                    .into(),
            ],
            Self::NameTooLong { .. } => vec!["Choose a shorter name".into()],
            Self::DuplicateEntry { name } => vec![
                format!("The structure declares '{}' twice under the same parent", name),
                "This is likely a bug in a generator".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName
            | Self::ReservedName { .. }
            | Self::InvalidProjectName { .. }
            | Self::NameTooLong { .. } => ErrorCategory::Validation,
            Self::DuplicateEntry { .. }
            | Self::InvalidEntryName { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
