//! API Facade for the application.
//!
//! Glues the filesystem and HTTP adapters to the generate command.

use std::path::PathBuf;

use crate::adapters::{FilesystemFragmentSource, HttpChatBackendFactory, load_settings};
use crate::app::commands::generate;
use crate::domain::API_KEY_ENV;

pub use crate::app::commands::generate::GenerateOptions;
pub use crate::domain::{AppError, GenerationResult};

/// Generate a test plan using the current directory for fragments and settings.
pub fn generate(options: GenerateOptions) -> Result<GenerationResult, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Generate a test plan resolving fragments and settings under `root`.
///
/// The credential falls back to `OPENAI_API_KEY` when `options.api_key` is unset.
pub fn generate_at(
    root: impl Into<PathBuf>,
    options: GenerateOptions,
) -> Result<GenerationResult, AppError> {
    let root = root.into();
    let settings = load_settings(&root, options.config.as_deref())?;
    let fragments = FilesystemFragmentSource::new(root);
    let factory = HttpChatBackendFactory::new(settings.backend.clone());

    let credential =
        generate::resolve_credential(options.api_key.clone(), std::env::var(API_KEY_ENV).ok());

    generate::execute(&options, credential, &settings, &fragments, &factory)
}
