//! Triage core: pure folder-selection state machine and view-model helpers.
mod effect;
mod file;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ProcessRequest, ProcessScope};
pub use file::{FileDescriptor, FileStatus, PickedFile};
pub use model::{ModelChoice, UnknownModel};
pub use msg::Msg;
pub use state::{format_size_kb, AppState, NO_FOLDER_LABEL};
pub use update::update;
pub use view_model::{AppViewModel, FileRowView, PROCESS_ALL_LABEL};
