use std::io;
use std::path::Path;

/// Port for reading prompt fragment resources.
pub trait FragmentSource {
    /// Read a fragment as text. A missing resource surfaces as `ErrorKind::NotFound`.
    fn read_fragment(&self, path: &Path) -> io::Result<String>;
}
