use std::collections::BTreeSet;

use crate::effect::{ProcessRequest, ProcessScope};
use crate::view_model::{AppViewModel, FileRowView};
use crate::{FileDescriptor, FileStatus, ModelChoice, PickedFile};

/// Label shown next to the folder button until a folder has been picked.
pub const NO_FOLDER_LABEL: &str = "No folder chosen";

/// Whole component state in one record; every transition goes through a
/// method here so related fields never change independently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    model: ModelChoice,
    folder_name: Option<String>,
    files: Vec<FileDescriptor>,
    // Keyed by file name only: same-named files in different sub-folders
    // share one entry.
    selected: BTreeSet<String>,
    show_file_list: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: ModelChoice) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    pub fn folder_name(&self) -> Option<&str> {
        self.folder_name.as_deref()
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn process_all_enabled(&self) -> bool {
        self.folder_name.is_some()
    }

    pub fn process_selected_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Replace the listing with a freshly picked folder.
    ///
    /// An empty pick leaves everything untouched and returns `false`.
    pub fn choose_folder(&mut self, picked: Vec<PickedFile>) -> bool {
        let Some(first) = picked.first() else {
            return false;
        };
        self.folder_name = Some(first.root_segment().to_string());
        self.files = picked.into_iter().map(FileDescriptor::from).collect();
        self.selected.clear();
        self.show_file_list = true;
        self.mark_dirty();
        true
    }

    pub fn toggle(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
        self.mark_dirty();
    }

    pub fn select_all(&mut self) {
        self.selected = self.files.iter().map(|f| f.name.clone()).collect();
        self.mark_dirty();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.mark_dirty();
    }

    pub fn set_model(&mut self, model: ModelChoice) {
        if self.model != model {
            self.model = model;
            self.mark_dirty();
        }
    }

    /// Returns `false` when no file has that path.
    pub fn set_status(&mut self, path: &str, status: FileStatus) -> bool {
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(file) => {
                if file.status != status {
                    file.status = status;
                    self.mark_dirty();
                }
                true
            }
            None => false,
        }
    }

    pub(crate) fn process_request(&self, scope: ProcessScope) -> Option<ProcessRequest> {
        let files: Vec<FileDescriptor> = match scope {
            ProcessScope::All if self.process_all_enabled() => self.files.clone(),
            ProcessScope::Selected if self.process_selected_enabled() => self
                .files
                .iter()
                .filter(|f| self.selected.contains(&f.name))
                .cloned()
                .collect(),
            _ => return None,
        };
        Some(ProcessRequest {
            scope,
            model: self.model,
            files,
        })
    }

    pub fn view(&self) -> AppViewModel {
        let selected_count = self.selected.len();
        AppViewModel {
            folder_label: self
                .folder_name
                .clone()
                .unwrap_or_else(|| NO_FOLDER_LABEL.to_string()),
            model: self.model,
            show_file_list: self.show_file_list && !self.files.is_empty(),
            files: self
                .files
                .iter()
                .map(|f| FileRowView {
                    name: f.name.clone(),
                    path: f.path.clone(),
                    size_label: format_size_kb(f.size),
                    status: f.status,
                    selected: self.is_selected(&f.name),
                })
                .collect(),
            selected_count,
            process_all_enabled: self.process_all_enabled(),
            process_selected_enabled: self.process_selected_enabled(),
            process_selected_label: format!("Process Selected Files ({selected_count})"),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Size in KiB with one decimal, e.g. `2048` -> `"2.0 KB"`.
///
/// Halves round up, so `256` is `"0.3 KB"`.
pub fn format_size_kb(size: u64) -> String {
    let tenths = (u128::from(size) * 10 + 512) / 1024;
    format!("{}.{} KB", tenths / 10, tenths % 10)
}
