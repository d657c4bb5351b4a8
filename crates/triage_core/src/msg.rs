#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The folder picker produced a listing (possibly empty).
    FolderPicked(Vec<crate::PickedFile>),
    /// User clicked the checkbox of a file, identified by name.
    FileToggled(String),
    /// User clicked Select All.
    SelectAllClicked,
    /// User clicked Deselect All.
    DeselectAllClicked,
    /// User picked an entry from the model dropdown.
    ModelSelected(crate::ModelChoice),
    /// User clicked Process All Files.
    ProcessAllClicked,
    /// User clicked Process Selected Files.
    ProcessSelectedClicked,
    /// Processor reported a new status for the file at `path`.
    FileStatusChanged {
        path: String,
        status: crate::FileStatus,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
}
