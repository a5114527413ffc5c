//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// JSON document used for round-trip checks
pub const SAMPLE_JSON: &str = r#"{"a":1,"b":[true,null,"x"]}"#;

/// Small YAML document with a mapping and a flow sequence
pub const SAMPLE_YAML: &str = "a: 1\nb: [true, null]\n";

/// Write `content` to `name` inside `temp_dir` and return its path
pub fn write_fixture(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Read a file produced by a conversion
pub fn read_output(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Route log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
