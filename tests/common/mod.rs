//! Common test utilities for vstamp integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway site directory for integration tests
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new empty site directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the site directory
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");
    }

    /// Read a file from the site directory
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in the site directory
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }
}
