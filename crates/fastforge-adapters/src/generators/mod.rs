//! Scaffolding generators.
//!
//! Each generator owns one slice of the generated project. The scaffold
//! pipeline runs them in a fixed order: the project tree first, then the
//! root-level configuration files, then the optional container and
//! Makefile pieces. `ModuleGenerator` stands apart because it extends an
//! existing project instead of creating a new one.

mod config_files;
mod docker;
mod makefile;
mod module;
mod project;

pub use config_files::ConfigFilesGenerator;
pub use docker::DockerGenerator;
pub use makefile::MakefileGenerator;
pub use module::ModuleGenerator;
pub use project::ProjectGenerator;

use fastforge_core::application::Generator;

/// The full scaffold pipeline in execution order.
pub fn default_generators() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(ProjectGenerator),
        Box::new(ConfigFilesGenerator),
        Box::new(DockerGenerator),
        Box::new(MakefileGenerator),
    ]
}
