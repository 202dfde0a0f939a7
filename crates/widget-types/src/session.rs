use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Persisted transcript schema version. Bump when the stored shape changes
/// so old blobs can be migrated instead of failing silently.
pub const TRANSCRIPT_SCHEMA_VERSION: u32 = 1;

/// The name/email pair captured once per session by the pre-chat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Versioned persistence envelope for the conversation transcript.
/// Structured records are the source of truth; rendered markup is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTranscript {
    pub schema: u32,
    pub messages: Vec<Message>,
}

impl StoredTranscript {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            schema: TRANSCRIPT_SCHEMA_VERSION,
            messages,
        }
    }
}
