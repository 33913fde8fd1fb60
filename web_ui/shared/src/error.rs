use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Whatever the browser threw at us while talking to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    err: JsValue,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.err, f)
    }
}

impl Error for FetchError {}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self { err: value }
    }
}

impl FetchError {
    pub fn as_string(&self) -> String {
        self.err.as_string().unwrap_or_else(|| "null".to_string())
    }
}

/// Every way a call to the backend can go wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response.
    Transport(String),
    /// Non-2xx status, with the server's `{"error": ...}` message if it sent one.
    Http(u16, Option<String>),
    /// The body wasn't JSON, or didn't match the expected shape.
    JsonDecode(String),
    JsonEncode(String),
    ConfigParseIssue(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "transport error -> {}", e),
            ClientError::Http(status, Some(msg)) => write!(f, "http {} -> {}", status, msg),
            ClientError::Http(status, None) => write!(f, "http {}", status),
            ClientError::JsonDecode(e) => write!(f, "failed to decode response -> {}", e),
            ClientError::JsonEncode(e) => write!(f, "failed to encode request -> {}", e),
            ClientError::ConfigParseIssue(e) => write!(f, "invalid client configuration -> {}", e),
        }
    }
}

impl Error for ClientError {}

impl From<FetchError> for ClientError {
    fn from(fe: FetchError) -> Self {
        ClientError::Transport(fe.to_string())
    }
}

/// A form was rejected before anything went over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    EmptyMessage,
}

impl FormError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill all fields.",
            FormError::EmptyMessage => "Please enter feedback before submitting.",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_display_includes_server_message() {
        let e = ClientError::Http(401, Some("Invalid credentials".to_string()));
        assert_eq!(e.to_string(), "http 401 -> Invalid credentials");
        assert_eq!(ClientError::Http(500, None).to_string(), "http 500");
    }

    #[test]
    fn form_error_messages() {
        assert_eq!(FormError::MissingFields.to_string(), "Please fill all fields.");
        assert_eq!(
            FormError::EmptyMessage.user_message(),
            "Please enter feedback before submitting."
        );
    }
}
