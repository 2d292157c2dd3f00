//! Artifact store port.
//!
//! The file-existence oracle the gates consult. Infrastructure adapters
//! implement it over a real directory; tests implement it in memory so gate
//! logic never depends on the process working directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Port for checking workflow artifacts
///
/// Paths handed to the store are relative to a working root
/// (e.g. `files/research_notes/ai-safety.md`).
#[async_trait]
pub trait ArtifactStorePort: Send + Sync {
    /// Resolve a root-relative path to the location that will be probed.
    fn resolve(&self, relative: &str) -> PathBuf;

    /// Render a resolved path for humans, relative to the root (`./files/...`).
    fn display(&self, path: &Path) -> String;

    /// Whether an artifact exists at `path`.
    ///
    /// Never fails: an unreadable location counts as missing.
    async fn exists(&self, path: &Path) -> bool;
}
