use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A source reference attached to an assistant answer.
/// Display text is the title or, absent that, the raw URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
}

impl Citation {
    pub fn new(title: Option<String>, url: impl Into<String>) -> Self {
        Self { title, url: url.into() }
    }

    pub fn display_text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}

/// A single message in a conversation.
///
/// `body` is the raw, pre-formatting text. The timestamp is captured at
/// append time (not request time) as an RFC 3339 string with local offset.
/// Messages are append-only: once in a transcript they are never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub citations: Vec<Citation>,
    pub timestamp: String,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            body: body.into(),
            citations: Vec::new(),
            timestamp: now_rfc3339(),
        }
    }

    pub fn assistant(body: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            body: body.into(),
            citations: Vec::new(),
            timestamp: now_rfc3339(),
        }
    }

    pub fn assistant_with_citations(body: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            role: Role::Assistant,
            body: body.into(),
            citations,
            timestamp: now_rfc3339(),
        }
    }

    /// Replace the capture-time timestamp (used when reconstructing messages).
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

/// A completed answer from the remote answering service.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}

fn now_rfc3339() -> String {
    chrono::Local::now().to_rfc3339()
}
