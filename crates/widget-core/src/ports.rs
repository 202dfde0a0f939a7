//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `widget-core` (pure Rust).
//! Implementations live in `widget-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use widget_types::{
    message::{Answer, Role},
    session::Identity,
    Result,
};

// ─── Storage Port ────────────────────────────────────────────

/// Session-scoped string key/value storage. Browser `sessionStorage` is
/// synchronous and tab-local, so the port is too; no cross-tab coordination
/// exists behind it.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Answer Port ─────────────────────────────────────────────

/// One prior turn sent as conversational context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

/// Request to send to the answering service
#[derive(Debug, Clone)]
pub struct AnswerRequest {
    pub question: String,
    pub identity: Option<Identity>,
    pub session_id: Option<String>,
    /// Bounded trailing window of prior turns; may be empty
    pub history: Vec<HistoryTurn>,
}

#[async_trait(?Send)]
pub trait AnswerPort {
    /// Send one question and resolve to the answer or a failure condition.
    /// At most one request is outstanding per widget instance; the disabled
    /// composer is the concurrency guard, not this trait.
    async fn ask(&self, req: AnswerRequest) -> Result<Answer>;
}
