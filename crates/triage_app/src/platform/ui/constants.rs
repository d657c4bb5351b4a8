pub const TITLE: &str = "Triaging Ophthalmology Patients";
pub const SUBTITLE: &str = "Use foundation models to triage Ophthalmology patients at scale.";
pub const TAB_TRIAGE: &str = "Triage";
pub const TAB_INFORMATION: &str = "Information";
pub const UPLOAD_HEADING: &str = "Upload Folder";
pub const CHOOSE_FOLDER: &str = "Choose Folder";
pub const FILES_HEADING: &str = "Files in Folder";
pub const SELECT_ALL: &str = "Select All";
pub const DESELECT_ALL: &str = "Deselect All";
pub const FOLDER_PROMPT: &str = "Folder path (Enter to pick, Esc to cancel)";

pub const HELP_BROWSE: &str =
    "o folder | m model | ↑/↓ move | space toggle | a all | d none | p process all | s process selected | q quit";

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const STATUS_COMPLETED: &str = "✓";
pub const STATUS_ERROR: &str = "!";
pub const STATUS_PROCESSING: &str = "…";
