//! Loading leaf values from the filesystem.
//!
//! The hashing and assembly modules only ever see byte slices; this is
//! the layer a caller uses to turn paths into those slices.

use crate::error::{MerkleError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// A named leaf value read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafInput {
    /// Path of the file, relative to the directory it was found in
    pub name: String,
    pub data: Vec<u8>,
}

impl AsRef<[u8]> for LeafInput {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Read a whole file
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MerkleError::PathNotFound(path.display().to_string()));
    }

    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}

/// Collect every file under `dir`, ordered by path.
///
/// Symlinks are followed, so a linked file contributes its target's
/// contents under the link's name. A dangling link is an error.
pub fn collect_directory(dir: impl AsRef<Path>) -> Result<Vec<LeafInput>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(MerkleError::PathNotFound(dir.display().to_string()));
    }

    let mut leaves = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        leaves.push(LeafInput {
            name,
            data: read_file(entry.path())?,
        });
    }

    debug!(dir = %dir.display(), files = leaves.len(), "collected directory");
    Ok(leaves)
}

/// Resolve paths into leaves in argument order. Directories expand to
/// their files in path order.
pub fn collect_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LeafInput>> {
    let mut leaves = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            leaves.extend(collect_directory(path)?);
        } else {
            leaves.push(LeafInput {
                name: path.display().to_string(),
                data: read_file(path)?,
            });
        }
    }

    Ok(leaves)
}
