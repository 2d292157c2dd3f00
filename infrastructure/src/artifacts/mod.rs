//! Artifact store adapters
//!
//! - [`LocalArtifactStore`] - Checks research notes and reports on the local file system

mod local_store;

pub use local_store::LocalArtifactStore;
