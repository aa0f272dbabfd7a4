//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "collect a configuration" or "generate a
//! project".

pub mod collector;
pub mod materializer;
pub mod preflight;
pub mod scaffold_service;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::{CollectOutcome, FlowProgress, SetupStep, StepFlow};
pub use materializer::materialize;
pub use preflight::{DependencyValidator, ToolStatus, ensure_target_available};
pub use scaffold_service::{
    Generator, PostGenOptions, PostGenWarning, ScaffoldService, ensure_env_file,
};
