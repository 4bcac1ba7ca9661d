//! Prompt composition: pure functions turning fragments and project context
//! into the two-part message sent to the backend.

mod system_instruction;
mod user_instruction;

pub use system_instruction::build_system_instruction;
pub use user_instruction::build_user_instruction;

use crate::domain::ProjectContext;

/// Raw fragment texts loaded for one invocation.
///
/// Contents are opaque; a missing resource is represented by an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFragments {
    /// Persona definition (role and tone).
    pub persona: String,
    /// Safety and anti-hallucination policy.
    pub guard: String,
}

impl PromptFragments {
    pub fn new(persona: impl Into<String>, guard: impl Into<String>) -> Self {
        Self { persona: persona.into(), guard: guard.into() }
    }
}

/// The complete request payload: system plus user instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub system_instruction: String,
    pub user_instruction: String,
}

impl ComposedMessage {
    /// Compose both instructions from fragments and context.
    pub fn compose(fragments: &PromptFragments, context: &ProjectContext) -> Self {
        Self {
            system_instruction: build_system_instruction(fragments),
            user_instruction: build_user_instruction(context),
        }
    }
}
