//! Text-generation backend port definition.

use crate::domain::{
    AppError, ComposedMessage, GenerationError, TEMPERATURE, VALIDATION_MODE_MESSAGE,
};

/// Role tag of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

impl ChatRole {
    /// Convert to API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
        }
    }
}

/// One role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// A single non-streaming completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered messages: system first, then user.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatRequest {
    /// Build the two-message request for a composed prompt.
    pub fn from_composed(composed: &ComposedMessage, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage { role: ChatRole::System, content: composed.system_instruction.clone() },
                ChatMessage { role: ChatRole::User, content: composed.user_instruction.clone() },
            ],
            temperature: TEMPERATURE,
        }
    }
}

/// Port for chat-completion backends.
pub trait ChatBackend {
    /// Request exactly one completion and return its text.
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError>;
}

/// Creates a configured backend once a credential is known.
pub trait ChatBackendFactory {
    fn create(&self, api_key: String) -> Result<Box<dyn ChatBackend>, AppError>;
}

/// Backend used when no credential is available.
///
/// Never touches the network; every request yields the validation-mode text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationModeBackend;

impl ChatBackend for ValidationModeBackend {
    fn complete(&self, _request: &ChatRequest) -> Result<String, GenerationError> {
        Ok(VALIDATION_MODE_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composed() -> ComposedMessage {
        ComposedMessage {
            system_instruction: "SYSTEM".to_string(),
            user_instruction: "USER".to_string(),
        }
    }

    #[test]
    fn request_carries_system_then_user() {
        let request = ChatRequest::from_composed(&composed(), "gpt-4o");

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[0].content, "SYSTEM");
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.messages[1].content, "USER");
    }

    #[test]
    fn temperature_is_low_but_not_zero() {
        let request = ChatRequest::from_composed(&composed(), "m");
        assert!(request.temperature > 0.0 && request.temperature < 0.5);
    }

    #[test]
    fn validation_backend_returns_placeholder() {
        let request = ChatRequest::from_composed(&composed(), "m");
        assert_eq!(ValidationModeBackend.complete(&request).unwrap(), VALIDATION_MODE_MESSAGE);
    }

    #[test]
    fn role_strings_match_wire_format() {
        assert_eq!(ChatRole::System.as_str(), "system");
        assert_eq!(ChatRole::User.as_str(), "user");
    }
}
