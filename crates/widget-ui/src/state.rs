//! UI-level state that drives rendering: input buffers, the outstanding
//! request, and pre-chat form feedback. The transcript and view state live
//! in widget-core; this layer applies request outcomes to them by draining
//! the event bus each frame.

use widget_core::store::SessionStore;
use widget_core::transcript::Transcript;
use widget_types::error::FormField;
use widget_types::event::WidgetEvent;
use widget_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Composer input buffer
    pub composer_text: String,
    /// Pre-chat form buffers
    pub form_name: String,
    pub form_email: String,
    /// Inline validation feedback: offending field plus message
    pub form_error: Option<(FormField, String)>,
    /// One-shot request to move focus to a form field
    pub focus_field: Option<FormField>,
    /// One-shot request to refocus the composer after a request completes
    pub focus_composer: bool,
    /// Generation of the outstanding request, if any
    pending: Option<u64>,
    next_request_id: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            composer_text: String::new(),
            form_name: String::new(),
            form_email: String::new(),
            form_error: None,
            focus_field: None,
            focus_composer: false,
            pending: None,
            next_request_id: 0,
        }
    }

    /// Whether a question is outstanding. The composer and send control are
    /// disabled while this holds, which is the whole concurrency guard.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new request generation and mark it outstanding.
    pub fn begin_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.pending = Some(self.next_request_id);
        self.next_request_id
    }

    /// Apply request outcomes to the transcript. Events from a superseded
    /// generation are discarded. Every network-family failure becomes the
    /// one generic assistant-style message; detail goes to the log only.
    pub fn process_events(
        &mut self,
        events: Vec<WidgetEvent>,
        transcript: &mut Transcript,
        store: &SessionStore,
        error_message: &str,
    ) {
        for event in events {
            match event {
                WidgetEvent::AnswerReceived { request_id, answer } => {
                    if self.pending != Some(request_id) {
                        log::debug!("Discarding stale answer for request {}", request_id);
                        continue;
                    }
                    self.pending = None;
                    self.focus_composer = true;
                    transcript.append(
                        Message::assistant_with_citations(answer.text, answer.citations),
                        store,
                    );
                }
                WidgetEvent::AskFailed { request_id, error } => {
                    if self.pending != Some(request_id) {
                        log::debug!("Discarding stale failure for request {}", request_id);
                        continue;
                    }
                    self.pending = None;
                    self.focus_composer = true;
                    log::error!("Answer request failed: {}", error);
                    transcript.append(Message::assistant(error_message), store);
                }
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
