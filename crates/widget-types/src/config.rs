use serde::{Deserialize, Serialize};

/// A suggested question shown on the welcome screen. The short label is
/// rendered on the button; the full question is what gets submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub label: String,
    pub question: String,
}

/// Top-level widget configuration. The host page may override the defaults
/// through a JSON global; every field has a usable default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Endpoint of the remote question-answering service
    pub api_url: String,
    /// Panel header title
    pub title: String,
    /// Assistant greeting seeded into an empty conversation
    pub greeting: String,
    pub welcome_heading: String,
    pub welcome_text: String,
    pub input_placeholder: String,
    pub faqs: Vec<FaqEntry>,
    /// Whether the pre-chat lead-capture form gates the conversation
    pub require_identity: bool,
    /// How many trailing transcript turns to send as conversational
    /// context. Zero disables the history window entirely.
    pub history_window: usize,
    /// The one generic user-facing failure text. Raw status codes and
    /// transport detail are logged, never shown.
    pub error_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/chat".to_string(),
            title: "Chat Assistant".to_string(),
            greeting: "👋 Hi! Ask me anything about our products, services, or solutions!"
                .to_string(),
            welcome_heading: "Hi there 👋".to_string(),
            welcome_text: "How can we help today? Pick a quick question below or type your own."
                .to_string(),
            input_placeholder: "Type your question...".to_string(),
            faqs: vec![
                FaqEntry {
                    label: "Getting started".to_string(),
                    question: "How do I get started?".to_string(),
                },
                FaqEntry {
                    label: "Pricing".to_string(),
                    question: "What does your pricing look like?".to_string(),
                },
                FaqEntry {
                    label: "Talk to a person".to_string(),
                    question: "How do I reach a human?".to_string(),
                },
            ],
            require_identity: true,
            history_window: 5,
            error_message: "Sorry, I encountered an error. Please try again in a moment."
                .to_string(),
        }
    }
}
