use interfacing::ApiErrorBody;
use wasm_bindgen::JsValue;

/// Any failed call to the API, with the message to show to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefers the `message` of the API's error body, falls back to the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody { message }) if !message.trim().is_empty() => Self::new(message),
            _ => Self::new(format!("Request failed with status code {}", status)),
        }
    }

    pub fn from_js(value: JsValue, fallback: &str) -> Self {
        Self::new(value.as_string().unwrap_or_else(|| fallback.to_owned()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<gloo_net::Error> for RequestFailure {
    fn from(error: gloo_net::Error) -> Self {
        Self::new(error.to_string())
    }
}
