use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use triage_engine::{pick_folder, PickError, PickerSettings};

fn fixture() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("patients");
    fs::create_dir_all(root.join("left")).unwrap();
    fs::create_dir_all(root.join("right/deep")).unwrap();
    fs::write(root.join("notes.txt"), "hello").unwrap();
    fs::write(root.join("left/eye.png"), vec![0u8; 2048]).unwrap();
    fs::write(root.join("right/eye.png"), vec![0u8; 10]).unwrap();
    fs::write(root.join("right/deep/scan.dcm"), "x").unwrap();
    fs::write(root.join(".hidden"), "h").unwrap();
    (temp, root)
}

#[test]
fn lists_all_files_with_root_prefixed_sorted_paths() {
    let (_temp, root) = fixture();

    let files = pick_folder(&root, &PickerSettings::default()).unwrap();
    let paths: Vec<_> = files.iter().map(|f| f.relative_path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "patients/.hidden",
            "patients/left/eye.png",
            "patients/notes.txt",
            "patients/right/deep/scan.dcm",
            "patients/right/eye.png",
        ]
    );
}

#[test]
fn records_name_size_and_mime_type() {
    let (_temp, root) = fixture();

    let files = pick_folder(&root, &PickerSettings::default()).unwrap();
    let eye = files
        .iter()
        .find(|f| f.relative_path == "patients/left/eye.png")
        .unwrap();

    assert_eq!(eye.name, "eye.png");
    assert_eq!(eye.size, 2048);
    assert_eq!(eye.mime_type, "image/png");

    let hidden = files.iter().find(|f| f.name == ".hidden").unwrap();
    assert_eq!(hidden.mime_type, "");
}

#[test]
fn hidden_files_can_be_excluded() {
    let (_temp, root) = fixture();
    let settings = PickerSettings {
        include_hidden: false,
        ..PickerSettings::default()
    };

    let files = pick_folder(&root, &settings).unwrap();
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| !f.name.starts_with('.')));
}

#[test]
fn max_depth_limits_the_walk() {
    let (_temp, root) = fixture();
    let settings = PickerSettings {
        max_depth: Some(0),
        ..PickerSettings::default()
    };

    let files = pick_folder(&root, &settings).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec![".hidden", "notes.txt"]);
}

#[test]
fn empty_folder_yields_no_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();

    let files = pick_folder(&root, &PickerSettings::default()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn missing_folder_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = pick_folder(&missing, &PickerSettings::default()).unwrap_err();
    assert!(matches!(err, PickError::NotADirectory(_)));
}

#[test]
fn a_file_is_not_a_folder() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("single.txt");
    fs::write(&file, "x").unwrap();

    let err = pick_folder(&file, &PickerSettings::default()).unwrap_err();
    assert!(matches!(err, PickError::NotADirectory(_)));
}
