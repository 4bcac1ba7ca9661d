mod fake_chat_backend;
mod memory_fragment_source;

#[allow(unused_imports)]
pub use fake_chat_backend::{FakeChatBackend, FakeChatBackendFactory};
#[allow(unused_imports)]
pub use memory_fragment_source::MemoryFragmentSource;
