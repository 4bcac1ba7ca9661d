//! Settings loading from the working directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, SETTINGS_FILE, Settings, parse_settings_content};

/// Load settings from `path`, or from `tpgen.toml` under `root` when no path is given.
///
/// The default file is optional; an explicitly requested file must exist.
pub fn load_settings(root: &Path, explicit: Option<&Path>) -> Result<Settings, AppError> {
    let path = match explicit {
        Some(path) => root.join(path),
        None => root.join(SETTINGS_FILE),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if explicit.is_some() {
                return Err(AppError::SettingsFileMissing(path.display().to_string()));
            }
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };

    parse_settings_content(&content)
}
