use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for speech files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a markdown file with content inside `dir`
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
