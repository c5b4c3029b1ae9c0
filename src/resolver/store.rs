//! Filesystem capability for hash versioning.
//!
//! The resolver never touches the filesystem directly; hash lookups go
//! through [`AssetStore`] so hosts can substitute their own storage (or tests
//! can record what gets read). The only consumer is the `hash` version
//! strategy; nothing else in the crate performs I/O.

use std::io;
use std::path::{Path, PathBuf};

/// Read/canonicalize capability over the asset root.
pub trait AssetStore: Send + Sync {
    /// Canonicalize a path, resolving symlinks and `.`/`..` components.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Read the full byte content of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The real local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl AssetStore for DiskStore {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
