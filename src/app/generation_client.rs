//! Generation client: dispatches a composed message and normalizes the outcome.

use tracing::{info, warn};

use crate::domain::{AppError, ComposedMessage, GenerationError, GenerationResult};
use crate::ports::{ChatBackend, ChatBackendFactory, ChatRequest, ValidationModeBackend};

/// Characters of the system instruction shown in the observation output.
pub const SYSTEM_PREVIEW_CHARS: usize = 500;

/// Sends composed messages to the selected backend.
pub struct GenerationClient {
    backend: Box<dyn ChatBackend>,
    model: String,
    validation_mode: bool,
}

impl GenerationClient {
    /// Pick the backend for this invocation.
    ///
    /// With a credential the factory builds a configured backend; without one
    /// the client runs in validation mode and the factory is never called.
    pub fn select<F: ChatBackendFactory + ?Sized>(
        credential: Option<String>,
        model: impl Into<String>,
        factory: &F,
    ) -> Result<Self, AppError> {
        let model = model.into();
        match credential {
            Some(api_key) => Ok(Self::new(factory.create(api_key)?, model)),
            None => Ok(Self::validation_mode(model)),
        }
    }

    pub fn new(backend: Box<dyn ChatBackend>, model: impl Into<String>) -> Self {
        Self { backend, model: model.into(), validation_mode: false }
    }

    pub fn validation_mode(model: impl Into<String>) -> Self {
        Self { backend: Box::new(ValidationModeBackend), model: model.into(), validation_mode: true }
    }

    #[cfg(test)]
    fn is_validation_mode(&self) -> bool {
        self.validation_mode
    }

    /// Dispatch and keep the failure category.
    pub fn try_generate(&self, composed: &ComposedMessage) -> Result<String, GenerationError> {
        print!("{}", render_observation(composed));

        if self.validation_mode {
            info!("No API key configured; running in validation mode");
        } else {
            info!(model = %self.model, "Sending chat completion request");
        }

        let request = ChatRequest::from_composed(composed, &self.model);
        let result = self.backend.complete(&request);
        if let Err(err) = &result {
            warn!("Generation failed: {}", err);
        }
        result
    }

    /// Dispatch and flatten any failure into `Error during generation: ...`.
    pub fn generate(&self, composed: &ComposedMessage) -> GenerationResult {
        GenerationResult::from(self.try_generate(composed))
    }
}

/// Diagnostic rendering of a composed message.
///
/// The system instruction is cut to [`SYSTEM_PREVIEW_CHARS`] characters with a
/// `(truncated)` marker; the user instruction is shown in full.
pub fn render_observation(composed: &ComposedMessage) -> String {
    format!(
        "\n--- Constructed System Prompt ---\n{}\n\n--- Constructed User Query ---\n{}\n",
        system_preview(&composed.system_instruction),
        composed.user_instruction
    )
}

fn system_preview(system_instruction: &str) -> String {
    match system_instruction.char_indices().nth(SYSTEM_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...\n(truncated)", &system_instruction[..cut]),
        None => system_instruction.to_string(),
    }
}
