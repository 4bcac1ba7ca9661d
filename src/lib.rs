//! tpgen: compose a QA test-plan prompt from persona and guard fragments and
//! dispatch it to a chat-completions backend.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOptions, generate, generate_at};
pub use domain::{
    AppError, ComposedMessage, ContextField, GenerationError, GenerationResult, ProjectContext,
};
