//! Subprocess adapters.

mod system;

pub use system::SystemRunner;
