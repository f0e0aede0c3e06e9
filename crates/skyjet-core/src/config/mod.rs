//! Configuration for the assistant engine.
//!
//! - `types`: configuration structures with serde defaults and validation
//! - `loader`: YAML loading and `SKYJET_*` environment overrides

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
