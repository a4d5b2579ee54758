//! Walks the specification tree to find the documents to merge.
//!
//! Expected layout:
//!
//! ```text
//! <root>/
//! └── <service>/                    e.g. web
//!     ├── common/                   skipped
//!     └── <resource-type>/          e.g. resource-manager
//!         ├── common/               skipped
//!         └── <provider>/           first non-common directory
//!             └── <version>/        entered while no *.json is present
//!                 └── *.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use tracing::{debug, info};

const COMMON_DIR: &str = "common";

/// Document paths under `root`, in the order they are to be merged.
///
/// # Errors
///
/// [`BuildError::Io`] for unreadable directories and [`BuildError::Layout`]
/// for a resource-type directory that leads to no documents.
pub fn discover_documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for service in sorted_entries(root)? {
        if !service.is_dir() {
            continue;
        }
        info!(service = %file_name(&service), "processing service folder");
        for resource_type in sorted_entries(&service)? {
            if !resource_type.is_dir() || file_name(&resource_type) == COMMON_DIR {
                continue;
            }
            let dir = document_dir(&resource_type)?;
            for file in json_files(&dir)? {
                debug!(document = %file.display(), "discovered document");
                documents.push(file);
            }
        }
    }
    Ok(documents)
}

/// Descend from a resource-type directory to the directory holding its
/// documents.
fn document_dir(resource_type: &Path) -> Result<PathBuf> {
    let mut dir = first_non_common_dir(resource_type)?;
    while json_files(&dir)?.is_empty() {
        dir = first_non_common_dir(&dir)?;
    }
    Ok(dir)
}

fn first_non_common_dir(dir: &Path) -> Result<PathBuf> {
    sorted_entries(dir)?
        .into_iter()
        .find(|entry| entry.is_dir() && file_name(entry) != COMMON_DIR)
        .ok_or_else(|| BuildError::Layout {
            path: dir.to_path_buf(),
            message: "no documents and no non-common sub-directory".to_string(),
        })
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|entry| entry.is_file() && entry.extension().is_some_and(|ext| ext == "json"))
        .collect())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| BuildError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| BuildError::io(dir, e))?;
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
