//! Project and module name validation.
//!
//! Generated projects are Python packages, so names must be importable
//! Python identifiers in snake_case. Validation is strict; normalization
//! exists so that friendly input ("My Cool App") can be massaged into a
//! valid name before validation runs.

use crate::domain::error::DomainError;

/// Maximum accepted name length.
const MAX_NAME_LEN: usize = 100;

/// Python hard keywords. Importing a package with one of these names is a
/// syntax error, so they are rejected outright.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Validation facade for name handling.
pub struct NameValidator;

impl NameValidator {
    /// Normalize free-form input into snake_case.
    ///
    /// Hyphens and spaces become underscores, the result is lowercased and
    /// stripped of every remaining invalid character, and a `project_`
    /// prefix is added when the result does not start with a letter.
    pub fn normalize(raw: &str) -> String {
        let mut normalized: String = raw
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();

        if let Some(first) = normalized.chars().next() {
            if !first.is_ascii_alphabetic() {
                normalized = format!("project_{normalized}");
            }
        }

        normalized
    }

    /// Validate a (supposedly normalized) name.
    ///
    /// Checks, in order: non-empty, not a Python keyword, matches
    /// `^[a-z][a-z0-9_]*$`, and at most 100 characters.
    pub fn validate(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        if Self::is_python_keyword(name) {
            return Err(DomainError::ReservedName { name: name.into() });
        }

        if !Self::matches_pattern(name) {
            return Err(DomainError::InvalidProjectName { name: name.into() });
        }

        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong { max: MAX_NAME_LEN });
        }

        Ok(())
    }

    /// Normalize then validate, returning the normalized name.
    pub fn normalize_and_validate(raw: &str) -> Result<String, DomainError> {
        let name = Self::normalize(raw);
        Self::validate(&name)?;
        Ok(name)
    }

    fn is_python_keyword(name: &str) -> bool {
        PYTHON_KEYWORDS.contains(&name)
    }

    /// Equivalent of `^[a-z][a-z0-9_]*$` without a regex dependency.
    fn matches_pattern(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}
