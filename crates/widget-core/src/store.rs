//! Session state store — session id, captured identity, and the transcript,
//! persisted through the storage port.
//!
//! Persistence failures are logged and swallowed: losing stored state must
//! never interrupt the conversation.

use std::rc::Rc;

use widget_types::error::FormField;
use widget_types::message::Message;
use widget_types::session::{Identity, StoredTranscript, TRANSCRIPT_SCHEMA_VERSION};
use widget_types::{Result, WidgetError};

use crate::ports::StoragePort;

pub const SESSION_ID_KEY: &str = "widget:session_id";
pub const IDENTITY_KEY: &str = "widget:identity";
pub const TRANSCRIPT_KEY: &str = "widget:transcript";

pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Return the persisted session id, generating and persisting one if
    /// absent. Idempotent within a session scope. A failed write still
    /// returns the generated id; the session just won't survive a reload.
    pub fn get_or_create_session_id(&self) -> String {
        match self.storage.get(SESSION_ID_KEY) {
            Ok(Some(id)) if !id.is_empty() => return id,
            Ok(_) => {}
            Err(e) => log::warn!("Failed to read session id: {}", e),
        }

        let id = generate_session_id();
        if let Err(e) = self.storage.set(SESSION_ID_KEY, &id) {
            log::warn!("Failed to persist session id: {}", e);
        }
        id
    }

    /// Read the captured identity. A missing or unreadable record is `None`;
    /// this never fails out to the caller.
    pub fn load_identity(&self) -> Option<Identity> {
        let raw = match self.storage.get(IDENTITY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read identity: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::warn!("Stored identity unreadable: {}", e);
                None
            }
        }
    }

    /// Validate and persist the pre-chat identity as a single record.
    /// The checks here are the weak client-side sanity checks; the form is
    /// expected to have blocked submission on them already.
    pub fn save_identity(&self, name: &str, email: &str) -> Result<Identity> {
        let identity = validate_identity(name, email)?;

        match serde_json::to_string(&identity) {
            Ok(json) => {
                if let Err(e) = self.storage.set(IDENTITY_KEY, &json) {
                    log::warn!("Failed to persist identity: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize identity: {}", e),
        }
        Ok(identity)
    }

    /// Load the persisted transcript. An unreadable blob or an unknown
    /// schema tag is treated as absent, with a warning.
    pub fn load_transcript(&self) -> Option<Vec<Message>> {
        let raw = match self.storage.get(TRANSCRIPT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read transcript: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<StoredTranscript>(&raw) {
            Ok(stored) if stored.schema == TRANSCRIPT_SCHEMA_VERSION => Some(stored.messages),
            Ok(stored) => {
                log::warn!("Unknown transcript schema {}, discarding", stored.schema);
                None
            }
            Err(e) => {
                log::warn!("Stored transcript unreadable: {}", e);
                None
            }
        }
    }

    /// Serialize and persist the whole transcript. O(n) per append is fine
    /// at expected transcript sizes of a few dozen messages.
    pub fn save_transcript(&self, messages: &[Message]) {
        let stored = StoredTranscript::new(messages.to_vec());
        match serde_json::to_string(&stored) {
            Ok(json) => {
                if let Err(e) = self.storage.set(TRANSCRIPT_KEY, &json) {
                    log::warn!("Failed to persist transcript: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize transcript: {}", e),
        }
    }

    /// Whether a persisted transcript exists, without deserializing it.
    pub fn has_transcript(&self) -> bool {
        matches!(self.storage.get(TRANSCRIPT_KEY), Ok(Some(_)))
    }
}

/// `sess_<unix-millis>_<8 random hex chars>` — a time component plus enough
/// randomness to make collisions across concurrent tabs negligible.
fn generate_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let entropy = uuid::Uuid::new_v4().simple().to_string();
    format!("sess_{}_{}", millis, &entropy[..8])
}

pub fn valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

pub fn valid_email(email: &str) -> bool {
    email.trim().contains('@')
}

/// Trim both fields and apply the minimal checks: name of at least two
/// characters, email containing `@`. Canonical validation is the upstream
/// service's job.
pub fn validate_identity(name: &str, email: &str) -> Result<Identity> {
    let name = name.trim();
    let email = email.trim();

    if !valid_name(name) {
        return Err(WidgetError::Validation {
            field: FormField::Name,
            message: "Please enter your name (at least 2 characters)".to_string(),
        });
    }
    if !valid_email(email) {
        return Err(WidgetError::Validation {
            field: FormField::Email,
            message: "Please enter a valid email address".to_string(),
        });
    }
    Ok(Identity::new(name, email))
}
