use crate::message::Answer;
use crate::WidgetError;

/// Outcomes of in-flight answer requests, delivered to the UI through the
/// event bus. `request_id` is the dispatch generation the event belongs to;
/// events from a superseded generation are discarded by the consumer.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// The answering service produced an answer
    AnswerReceived { request_id: u64, answer: Answer },

    /// The request failed (non-2xx, transport, or malformed body)
    AskFailed { request_id: u64, error: WidgetError },
}
