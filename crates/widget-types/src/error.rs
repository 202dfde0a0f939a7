use thiserror::Error;

/// Field of the pre-chat form a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum WidgetError {
    /// The answering service replied with a non-2xx status.
    #[error("request failed with HTTP status {0}")]
    RequestFailed(u16),

    /// The request never produced an HTTP response.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The response body was unparsable or missing the answer field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A storage read or write failed. Recovered locally, never user-visible.
    #[error("persistence failed: {0}")]
    PersistenceFailed(String),

    /// A pre-chat form field failed the client-side sanity check.
    #[error("{field:?}: {message}")]
    Validation { field: FormField, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}
