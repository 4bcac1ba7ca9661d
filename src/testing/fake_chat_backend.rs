use crate::domain::{AppError, GenerationError};
use crate::ports::{ChatBackend, ChatBackendFactory, ChatRequest};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeChatBackend {
    pub received_requests: Arc<Mutex<Vec<ChatRequest>>>,
    pub response: Result<String, GenerationError>,
}

impl FakeChatBackend {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { received_requests: Arc::new(Mutex::new(vec![])), response: Ok(text.into()) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { received_requests: Arc::new(Mutex::new(vec![])), response: Err(error) }
    }

    pub fn get_received_requests(&self) -> Vec<ChatRequest> {
        self.received_requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received_requests.lock().unwrap().len()
    }
}

impl ChatBackend for FakeChatBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        self.received_requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

pub struct FakeChatBackendFactory {
    pub backend: FakeChatBackend,
    pub api_keys: Mutex<Vec<String>>,
}

impl FakeChatBackendFactory {
    pub fn new(backend: FakeChatBackend) -> Self {
        Self { backend, api_keys: Mutex::new(vec![]) }
    }

    pub fn get_api_keys(&self) -> Vec<String> {
        self.api_keys.lock().unwrap().clone()
    }
}

impl ChatBackendFactory for FakeChatBackendFactory {
    fn create(&self, api_key: String) -> Result<Box<dyn ChatBackend>, AppError> {
        self.api_keys.lock().unwrap().push(api_key);
        Ok(Box::new(self.backend.clone()))
    }
}
