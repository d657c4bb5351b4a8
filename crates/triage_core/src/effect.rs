use crate::{FileDescriptor, ModelChoice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a batch to the processing collaborator.
    Process(ProcessRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessScope {
    All,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub scope: ProcessScope,
    pub model: ModelChoice,
    pub files: Vec<FileDescriptor>,
}
