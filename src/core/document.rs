//! # Document Store
//!
//! Loads every document under a root directory into memory, once, at startup.
//!
//! ```text
//! root/
//! ├── a/x.md      ──▶ Document { path: "root/a/x.md", content: "..." }
//! ├── b/y.md      ──▶ Document { path: "root/b/y.md", content: "..." }
//! └── b/z.txt         (skipped: wrong extension)
//! ```
//!
//! The returned order is whatever the directory walk yields. It is not sorted
//! and is not guaranteed to match across platforms or filesystems.
//!
//! Loading is all-or-nothing: the first unreadable directory or file aborts
//! the load and nothing is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

/// A text file loaded into memory. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path as text, for matching and display.
    pub fn path_str(&self) -> std::borrow::Cow<'_, str> {
        self.path.to_string_lossy()
    }

    /// Whether the document should be rendered as markdown in the reader.
    pub fn is_markdown(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot scan {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Normalize an extension to the suffix form matched against file names.
///
/// `"md"` and `".md"` both become `".md"`.
pub fn extension_suffix(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Recursively load every non-directory entry under `root` whose name ends
/// with `extension`. A matching symlink is read through to its target.
pub fn load(root: &Path, extension: &str) -> Result<Vec<Document>, LoadError> {
    let suffix = extension_suffix(extension);
    info!("Loading '{}' documents from {}", suffix, root.display());

    let mut documents = Vec::new();
    // Linked directories are not descended into; a linked root still is
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if entry.file_type().is_dir() || !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }

        let path = entry.into_path();
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;
        debug!("Loaded {} ({} bytes)", path.display(), content.len());
        documents.push(Document { path, content });
    }

    info!("Loaded {} documents", documents.len());
    Ok(documents)
}
