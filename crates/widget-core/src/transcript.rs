//! The ordered list of all messages exchanged in one session, plus the
//! calendar-day separators and timestamps derived from it for display.

use chrono::{DateTime, Local, NaiveDate};
use widget_types::message::Message;

use crate::ports::HistoryTurn;
use crate::store::SessionStore;

/// A display entry: either a date separator label or a message.
#[derive(Debug)]
pub enum TranscriptEntry<'a> {
    Separator(String),
    Msg(&'a Message),
}

/// Append-only message list. Display entries are derived on demand so the
/// persisted form stays structured data, never rendered output.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Append then persist, in that order: a failed append can never leave a
    /// half-written blob behind.
    pub fn append(&mut self, message: Message, store: &SessionStore) {
        self.messages.push(message);
        store.save_transcript(&self.messages);
    }

    /// Replace the in-memory list with a loaded transcript.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Derive display entries, inserting one separator per calendar-day
    /// transition. `today` is passed in so labeling is deterministic.
    pub fn entries(&self, today: NaiveDate) -> Vec<TranscriptEntry<'_>> {
        let mut out = Vec::with_capacity(self.messages.len() + 1);
        let mut last_day: Option<NaiveDate> = None;

        for msg in &self.messages {
            if let Some(day) = local_day(&msg.timestamp) {
                if last_day != Some(day) {
                    out.push(TranscriptEntry::Separator(day_label(day, today)));
                    last_day = Some(day);
                }
            }
            out.push(TranscriptEntry::Msg(msg));
        }
        out
    }

    /// The bounded trailing context window sent with a request: at most the
    /// last `n` turns, oldest first. Empty when `n` is zero.
    pub fn history_window(&self, n: usize) -> Vec<HistoryTurn> {
        let start = self.messages.len().saturating_sub(n);
        self.messages[start..]
            .iter()
            .map(|m| HistoryTurn {
                role: m.role,
                content: m.body.clone(),
            })
            .collect()
    }
}

/// Local calendar day of an RFC 3339 timestamp. Unparsable timestamps get
/// no separator rather than a bogus one.
pub fn local_day(timestamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

/// `Today`, `Yesterday`, or an abbreviated `Mon D, YYYY`.
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        day.format("%b %-d, %Y").to_string()
    }
}

/// Localized hour:minute with meridiem, e.g. `2:07 PM`.
pub fn format_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
