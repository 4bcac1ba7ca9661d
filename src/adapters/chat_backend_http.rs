//! Chat-completions backend implementation using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, BackendSettings, GenerationError};
use crate::ports::{ChatBackend, ChatBackendFactory, ChatRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Chat completion request failed";

/// HTTP transport for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Performs exactly one request per call with no retry.
#[derive(Clone)]
pub struct HttpChatBackend {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpChatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatBackend")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatBackend {
    /// Create a new HTTP backend with the given API key and settings.
    pub fn new(api_key: String, settings: &BackendSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_key, api_url: settings.api_url.clone(), client })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text();

        if status.is_success() {
            let body_text = body.map_err(|e| GenerationError::Transport(e.to_string()))?;
            return parse_completion(&body_text);
        }

        // The status alone classifies an error response; its body is best effort.
        let body_text = body.unwrap_or_default();

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status == StatusCode::TOO_MANY_REQUESTS {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(classify_status(status, message))
    }
}

fn classify_status(status: StatusCode, message: String) -> GenerationError {
    match status.as_u16() {
        401 | 403 => GenerationError::Authentication { status: status.as_u16(), message },
        429 => GenerationError::RateLimited { message },
        code => GenerationError::Api { status: code, message },
    }
}

fn parse_completion(body: &str) -> Result<String, GenerationError> {
    let api_response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    api_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::MalformedResponse("No generated text in response".into()))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    n: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatRequest> for ApiRequest<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| ApiMessage { role: m.role.as_str(), content: &m.content })
                .collect(),
            temperature: request.temperature,
            n: 1,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ChatBackend for HttpChatBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        self.send_request(&ApiRequest::from(request))
    }
}

/// Builds [`HttpChatBackend`] instances from shared backend settings.
#[derive(Debug, Clone)]
pub struct HttpChatBackendFactory {
    settings: BackendSettings,
}

impl HttpChatBackendFactory {
    pub fn new(settings: BackendSettings) -> Self {
        Self { settings }
    }
}

impl ChatBackendFactory for HttpChatBackendFactory {
    fn create(&self, api_key: String) -> Result<Box<dyn ChatBackend>, AppError> {
        Ok(Box::new(HttpChatBackend::new(api_key, &self.settings)?))
    }
}
