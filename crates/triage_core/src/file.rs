/// Processing status of a listed file.
///
/// Only `Pending` is reachable from user input; the other states are set
/// through `Msg::FileStatusChanged` by whatever processor is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

/// One file as reported by the folder picker, before it enters the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    /// Path relative to the chosen folder's parent; the first segment is the
    /// folder's own name and separators are always `/`.
    pub relative_path: String,
    pub size: u64,
    pub mime_type: String,
}

impl PickedFile {
    pub fn new(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Top-level segment of the relative path, i.e. the chosen folder's name.
    pub fn root_segment(&self) -> &str {
        self.relative_path
            .split('/')
            .next()
            .unwrap_or(&self.relative_path)
    }
}

/// In-memory record summarising one listed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub mime_type: String,
    pub status: FileStatus,
}

impl From<PickedFile> for FileDescriptor {
    fn from(file: PickedFile) -> Self {
        Self {
            name: file.name,
            path: file.relative_path,
            size: file.size,
            mime_type: file.mime_type,
            status: FileStatus::Pending,
        }
    }
}
