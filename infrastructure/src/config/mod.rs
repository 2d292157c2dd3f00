//! Configuration file loading for research-gates
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RESEARCH_GATES_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./research-gates.toml` or `./.research-gates.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/research-gates/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGatesConfig, FileOutputConfig, FileOutputFormat,
    FileStateConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
