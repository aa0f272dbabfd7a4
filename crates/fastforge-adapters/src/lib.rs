//! Infrastructure adapters for fastforge.
//!
//! This crate implements the ports defined in `fastforge-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! generators that produce the scaffolded project files.

pub mod filesystem;
pub mod generators;
pub mod process;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{
    ConfigFilesGenerator, DockerGenerator, MakefileGenerator, ModuleGenerator, ProjectGenerator,
    default_generators,
};
pub use process::SystemRunner;
