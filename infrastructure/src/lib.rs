//! Infrastructure layer for research-gates
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifacts;
pub mod config;
pub mod state;

// Re-export commonly used types
pub use artifacts::LocalArtifactStore;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGatesConfig, FileOutputConfig,
    FileOutputFormat, FileStateConfig,
};
pub use state::{DEFAULT_STATE_PATH, JsonSessionSource};
