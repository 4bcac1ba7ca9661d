use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::FragmentSource;

/// Reads prompt fragments from disk, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FilesystemFragmentSource {
    root: PathBuf,
}

impl FilesystemFragmentSource {
    /// Create a fragment source for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl FragmentSource for FilesystemFragmentSource {
    fn read_fragment(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }
}
