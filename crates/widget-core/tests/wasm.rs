//! WASM-target tests for widget-core (Node.js runtime).
//!
//! Mirrors the key native unit tests under wasm32-unknown-unknown via
//! `wasm-pack test --node`. Browser storage adapters are exercised in
//! widget-platform's suite; here a mock port stands in.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen_test::*;

use widget_core::controller::{ViewState, WidgetController};
use widget_core::markdown;
use widget_core::ports::StoragePort;
use widget_core::store::SessionStore;
use widget_core::transcript::Transcript;
use widget_types::message::Message;

struct MockStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MockStorage {
    fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl StoragePort for MockStorage {
    fn get(&self, key: &str) -> widget_types::Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> widget_types::Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> widget_types::Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

// ─── Session Store Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn session_id_idempotent_under_wasm() {
    // uuid's js feature and chrono's wasmbind clock both engage here
    let store = SessionStore::new(Rc::new(MockStorage::new()));
    let first = store.get_or_create_session_id();
    let second = store.get_or_create_session_id();
    assert!(first.starts_with("sess_"));
    assert_eq!(first, second);
}

#[wasm_bindgen_test]
fn transcript_roundtrip_under_wasm() {
    let store = SessionStore::new(Rc::new(MockStorage::new()));
    let mut transcript = Transcript::new();
    transcript.append(Message::user("q"), &store);
    transcript.append(Message::assistant("a"), &store);

    let loaded = store.load_transcript().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].body, "q");
    assert_eq!(loaded[1].body, "a");
}

// ─── Controller Tests ────────────────────────────────────

#[wasm_bindgen_test]
fn open_without_identity_enters_prechat() {
    let mut controller = WidgetController::new(true);
    assert_eq!(controller.open_panel(false, false), ViewState::PrechatForm);
    assert!(!controller.composer_visible());
}

#[wasm_bindgen_test]
fn open_with_transcript_resumes_conversation() {
    let mut controller = WidgetController::new(true);
    assert_eq!(controller.open_panel(true, true), ViewState::Conversation);
}

// ─── Markdown Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn format_combined_property() {
    let html = markdown::format("**a** [b](http://x) \n• one\n• two");
    assert!(html.contains("<strong>a</strong>"));
    assert!(html.contains(r#"<a href="http://x" target="_blank" rel="noopener noreferrer">b</a>"#));
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[wasm_bindgen_test]
fn format_escapes_metacharacters() {
    let html = markdown::format("<script>alert(1)</script>");
    assert!(!html.contains("<script"));
    assert!(html.contains("&lt;script&gt;"));
}
