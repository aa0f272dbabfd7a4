//! Domain entities.

pub mod project_config;
pub mod render;
pub mod structure;

pub use project_config::{DEFAULT_PYTHON_VERSION, ProjectConfig, ProjectConfigBuilder};
pub use render::{ContextValue, TemplateContext};
pub use structure::{FileContent, StructureNode, StructureSpec};
