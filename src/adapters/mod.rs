pub mod chat_backend_http;
pub mod fragment_filesystem;
pub mod settings_filesystem;

pub use chat_backend_http::{HttpChatBackend, HttpChatBackendFactory};
pub use fragment_filesystem::FilesystemFragmentSource;
pub use settings_filesystem::load_settings;
