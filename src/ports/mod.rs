mod chat_backend;
mod fragment_source;

pub use chat_backend::{
    ChatBackend, ChatBackendFactory, ChatMessage, ChatRequest, ChatRole, ValidationModeBackend,
};
pub use fragment_source::FragmentSource;
