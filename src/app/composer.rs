//! Prompt composer service: loads fragments once, then builds messages.

use std::io;
use std::path::Path;

use tracing::warn;

use crate::domain::{AppError, ComposedMessage, ProjectContext, PromptFragments, PromptPaths};
use crate::ports::FragmentSource;

/// Load one fragment.
///
/// A missing resource is read as empty text and reported through
/// `tracing::warn!` only. Callers that need the diagnostic must install a
/// subscriber that lets `warn` through (the CLI does, unless `RUST_LOG` is
/// stricter). Any other I/O failure is returned to the caller.
pub fn load_fragment<S: FragmentSource + ?Sized>(
    source: &S,
    path: &Path,
) -> Result<String, AppError> {
    match source.read_fragment(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("Prompt fragment not found: {}", path.display());
            Ok(String::new())
        }
        Err(err) => Err(AppError::Io(io::Error::new(
            err.kind(),
            format!("Failed to read prompt fragment {}: {}", path.display(), err),
        ))),
    }
}

/// Holds the fragments of one invocation.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    fragments: PromptFragments,
}

impl PromptComposer {
    pub fn new(fragments: PromptFragments) -> Self {
        Self { fragments }
    }

    /// Load persona and guard fragments from `source`.
    pub fn load<S: FragmentSource + ?Sized>(
        source: &S,
        paths: &PromptPaths,
    ) -> Result<Self, AppError> {
        let persona = load_fragment(source, &paths.persona)?;
        let guard = load_fragment(source, &paths.guard)?;
        Ok(Self::new(PromptFragments { persona, guard }))
    }

    pub fn compose(&self, context: &ProjectContext) -> ComposedMessage {
        ComposedMessage::compose(&self.fragments, context)
    }
}
