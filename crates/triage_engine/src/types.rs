use crate::ProcessError;

pub type BatchId = u64;

/// One regular file found below a picked folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    /// `<folder name>/<path below folder>`, `/`-separated.
    pub relative_path: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id: BatchId,
    pub model_id: String,
    pub files: Vec<BatchFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    pub name: String,
    pub relative_path: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    Running,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FileProgress {
        batch_id: BatchId,
        relative_path: String,
        stage: FileStage,
    },
    BatchCompleted {
        batch_id: BatchId,
        result: Result<(), ProcessError>,
    },
}
