//! The fixed set of mirrored packages.
//!
//! Each golang.org/x sub-repository is mirrored from its canonical GitHub
//! remote into `<root>/src/<import path>`. The catalog is defined at build
//! time and processed in declaration order.

use std::path::{Path, PathBuf};

use crate::constants::SRC_DIR;

/// Names of the golang.org/x sub-repositories kept in sync, in mirror order.
const GO_SUB_REPOS: &[&str] = &[
    "blog", "crypto", "exp", "image", "mobile", "net", "sys", "talks", "text", "tools", "lint",
];

/// One mirrored package: an import path and the remote it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPackage {
    pub import_path: String,
    pub remote_repo: String,
}

impl MirrorPackage {
    pub fn new(import_path: impl Into<String>, remote_repo: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            remote_repo: remote_repo.into(),
        }
    }

    /// Local checkout directory for this package under the workspace root.
    #[must_use]
    pub fn target_dir(&self, root: &Path) -> PathBuf {
        root.join(SRC_DIR).join(&self.import_path)
    }
}

/// The full catalog, in declaration order.
#[must_use]
pub fn packages() -> Vec<MirrorPackage> {
    GO_SUB_REPOS
        .iter()
        .map(|name| {
            MirrorPackage::new(
                format!("golang.org/x/{name}"),
                format!("https://github.com/golang/{name}"),
            )
        })
        .collect()
}
