//! Core value objects for project configuration.
//!
//! These are small, copyable enums with stable wire representations: the
//! string forms returned by [`as_str`] are what templates, the generated
//! project record, and the CLI all agree on.
//!
//! [`as_str`]: PackageManager::as_str

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Package manager ───────────────────────────────────────────────────────────

/// Supported Python package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Uv,
    Poetry,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uv => "uv",
            Self::Poetry => "poetry",
        }
    }

    /// Binary name probed on the user's PATH.
    pub fn command(&self) -> &'static str {
        self.as_str()
    }

    /// Arguments for the dependency-install step after generation.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            Self::Uv => &["sync"],
            Self::Poetry => &["install"],
        }
    }

    /// Installation instructions shown when the binary is missing.
    pub fn install_url(&self) -> &'static str {
        match self {
            Self::Uv => "https://docs.astral.sh/uv/getting-started/installation/",
            Self::Poetry => "https://python-poetry.org/docs/#installation",
        }
    }

    pub fn all() -> &'static [PackageManager] {
        &[Self::Uv, Self::Poetry]
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uv" => Ok(Self::Uv),
            "poetry" => Ok(Self::Poetry),
            other => Err(format!("unknown package manager: {other}")),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Linters ───────────────────────────────────────────────────────────────────

/// Supported linters and formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    Ruff,
    Black,
    Flake8,
}

impl Linter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ruff => "ruff",
            Self::Black => "black",
            Self::Flake8 => "flake8",
        }
    }

    pub fn all() -> &'static [Linter] {
        &[Self::Ruff, Self::Black, Self::Flake8]
    }
}

impl FromStr for Linter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ruff" => Ok(Self::Ruff),
            "black" => Ok(Self::Black),
            "flake8" => Ok(Self::Flake8),
            other => Err(format!("unknown linter: {other}")),
        }
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Database environments ─────────────────────────────────────────────────────

/// Container environments a database setup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEnvironment {
    #[serde(rename = "dev")]
    Development,
    #[serde(rename = "prod")]
    Production,
}

impl DatabaseEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prod",
        }
    }

    /// Both environments, the default when database support is enabled.
    pub fn both() -> Vec<DatabaseEnvironment> {
        vec![Self::Development, Self::Production]
    }
}

impl FromStr for DatabaseEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for DatabaseEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
