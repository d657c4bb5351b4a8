use std::sync::mpsc;

use thiserror::Error;
use triage_logging::triage_info;

use crate::{Batch, EngineEvent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("no processor is bound; batch of {file_count} file(s) dropped")]
    Unbound { file_count: usize },
    #[error("processing failed: {0}")]
    Failed(String),
}

pub trait StatusSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelStatusSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelStatusSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelStatusSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// External collaborator that actually does something with a batch.
///
/// Implementations report per-file progress through `sink` using
/// `EngineEvent::FileProgress`; the engine emits `BatchCompleted` itself.
pub trait Processor: Send + Sync {
    fn process(&self, batch: &Batch, sink: &dyn StatusSink) -> Result<(), ProcessError>;
}

/// Default processor: there is no pipeline behind the process buttons, so
/// the batch is logged and dropped without touching any file status.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnboundProcessor;

impl Processor for UnboundProcessor {
    fn process(&self, batch: &Batch, _sink: &dyn StatusSink) -> Result<(), ProcessError> {
        triage_info!(
            "batch {} for model {} has no bound processor ({} files)",
            batch.id,
            batch.model_id,
            batch.files.len()
        );
        Err(ProcessError::Unbound {
            file_count: batch.files.len(),
        })
    }
}
