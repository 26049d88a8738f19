use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn calprint_cmd() -> Command {
    let mut cmd = Command::cargo_bin("calprint").unwrap();
    cmd.env_remove("CALPRINT_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside the temp directory
#[allow(dead_code)]
pub fn write_file(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
