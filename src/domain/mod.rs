pub mod error;
pub mod generation;
pub mod project_context;
pub mod prompt;
pub mod settings;

pub use error::AppError;
pub use generation::{
    GENERATION_ERROR_PREFIX, GenerationError, GenerationResult, VALIDATION_MODE_MESSAGE,
};
pub use project_context::{ContextField, NOT_AVAILABLE, ProjectContext};
pub use prompt::{
    ComposedMessage, PromptFragments, build_system_instruction, build_user_instruction,
};
pub use settings::{
    API_KEY_ENV, BackendSettings, PromptPaths, SETTINGS_FILE, Settings, TEMPERATURE,
    parse_settings_content,
};
