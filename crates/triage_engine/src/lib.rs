//! Triage engine: folder listing and the processing seam.
mod engine;
mod mime;
mod picker;
mod processor;
mod types;

pub use engine::EngineHandle;
pub use mime::guess_mime_type;
pub use picker::{pick_folder, PickError, PickerSettings};
pub use processor::{ChannelStatusSink, ProcessError, Processor, StatusSink, UnboundProcessor};
pub use types::{Batch, BatchFile, BatchId, EngineEvent, FileStage, ListedFile};
