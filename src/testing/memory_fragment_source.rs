use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::FragmentSource;

/// In-memory fragment source for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryFragmentSource {
    pub files: HashMap<PathBuf, String>,
    pub failing: HashMap<PathBuf, io::ErrorKind>,
}

#[allow(dead_code)]
impl MemoryFragmentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.failing.insert(PathBuf::from(path), kind);
        self
    }
}

impl FragmentSource for MemoryFragmentSource {
    fn read_fragment(&self, path: &Path) -> io::Result<String> {
        if let Some(kind) = self.failing.get(path) {
            return Err(io::Error::new(*kind, "Mock fragment error"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}
