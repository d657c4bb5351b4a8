use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use triage_logging::{triage_info, triage_warn};
use walkdir::WalkDir;

use crate::mime::guess_mime_type;
use crate::ListedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSettings {
    pub follow_links: bool,
    /// Depth below the picked folder; `None` walks everything.
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum PickError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("folder has no usable name: {0}")]
    UnnamedRoot(PathBuf),
    #[error("failed to read {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// List every regular file below `root`, the way a directory upload input
/// reports them: each relative path starts with the folder's own name.
///
/// Entries are sorted by relative path. Unreadable entries below the root are
/// skipped with a warning.
pub fn pick_folder(root: &Path, settings: &PickerSettings) -> Result<Vec<ListedFile>, PickError> {
    if !root.is_dir() {
        return Err(PickError::NotADirectory(root.to_path_buf()));
    }
    let folder_name = folder_name(root)?;

    let mut walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .min_depth(1);
    if let Some(depth) = settings.max_depth {
        walker = walker.max_depth(depth.saturating_add(1));
    }

    let include_hidden = settings.include_hidden;
    let mut files = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || include_hidden || !is_hidden(entry.file_name())
        });
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(PickError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                triage_warn!("Skipping unreadable entry under {:?}: {}", root, err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                triage_warn!("Skipping {:?}: {}", entry.path(), err);
                continue;
            }
        };
        let Ok(below) = entry.path().strip_prefix(root) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        files.push(ListedFile {
            mime_type: guess_mime_type(&name).to_string(),
            name,
            relative_path: join_relative(&folder_name, below),
            size,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    triage_info!("Picked {:?}: {} file(s)", root, files.len());
    Ok(files)
}

fn folder_name(root: &Path) -> Result<String, PickError> {
    let named = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            // `.` or `..` style paths: use the resolved directory's name.
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        });
    match named {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(PickError::UnnamedRoot(root.to_path_buf())),
    }
}

fn join_relative(folder_name: &str, below: &Path) -> String {
    let mut out = folder_name.to_string();
    for component in below.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
