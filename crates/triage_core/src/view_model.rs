use crate::{FileStatus, ModelChoice};

pub const PROCESS_ALL_LABEL: &str = "Process All Files";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub folder_label: String,
    pub model: ModelChoice,
    pub show_file_list: bool,
    pub files: Vec<FileRowView>,
    pub selected_count: usize,
    pub process_all_enabled: bool,
    pub process_selected_enabled: bool,
    pub process_selected_label: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub name: String,
    pub path: String,
    pub size_label: String,
    pub status: FileStatus,
    pub selected: bool,
}
