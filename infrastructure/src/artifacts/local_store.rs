//! Local file system artifact store
//!
//! [`LocalArtifactStore`] implements [`ArtifactStorePort`] over a working
//! root directory. Relative artifact paths are joined onto the root, and
//! paths under the root are displayed as `./relative/path`.

use async_trait::async_trait;
use gates_application::ArtifactStorePort;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Artifact store backed by the local file system.
///
/// # Examples
///
/// ```
/// use gates_application::ArtifactStorePort;
/// use gates_infrastructure::LocalArtifactStore;
///
/// let store = LocalArtifactStore::new("/work");
/// let path = store.resolve("files/research_notes/ai-safety.md");
/// assert_eq!(store.display(&path), "./files/research_notes/ai-safety.md");
/// ```
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store rooted at the process working directory.
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactStorePort for LocalArtifactStore {
    fn resolve(&self, relative: &str) -> PathBuf {
        // Absolute paths replace the root
        self.root.join(relative)
    }

    fn display(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => {
                let parts: Vec<_> = relative
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(part) => Some(part.to_string_lossy()),
                        Component::ParentDir => Some("..".into()),
                        _ => None,
                    })
                    .collect();
                format!("./{}", parts.join("/"))
            }
            Err(_) => path.display().to_string(),
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(
                    "Could not check {}: {}; treating as missing",
                    path.display(),
                    e
                );
                false
            }
        }
    }
}
