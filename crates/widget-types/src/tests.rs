#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::session::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.body, "Hello");
        assert!(msg.citations.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.body, "I can help");
    }

    #[test]
    fn test_message_assistant_with_citations() {
        let msg = Message::assistant_with_citations(
            "See below",
            vec![Citation::new(Some("Docs".to_string()), "https://example.com/docs")],
        );
        assert_eq!(msg.citations.len(), 1);
        assert_eq!(msg.citations[0].url, "https://example.com/docs");
    }

    #[test]
    fn test_message_with_timestamp() {
        let msg = Message::user("hi").with_timestamp("2026-03-01T09:30:00+00:00");
        assert_eq!(msg.timestamp, "2026-03-01T09:30:00+00:00");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::assistant_with_citations(
            "answer",
            vec![Citation::new(None, "https://example.com")],
        );
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::Assistant);
        assert_eq!(deserialized.body, "answer");
        assert_eq!(deserialized.citations.len(), 1);
        assert_eq!(deserialized.timestamp, msg.timestamp);
    }

    #[test]
    fn test_message_empty_citations_omitted() {
        let json = serde_json::to_string(&Message::user("q")).unwrap();
        assert!(!json.contains("citations"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Citation Tests ──────────────────────────────────────

    #[test]
    fn test_citation_display_text_prefers_title() {
        let c = Citation::new(Some("Fall Protection Guide".to_string()), "https://x.test/a");
        assert_eq!(c.display_text(), "Fall Protection Guide");
    }

    #[test]
    fn test_citation_display_text_falls_back_to_url() {
        let c = Citation::new(None, "https://x.test/a");
        assert_eq!(c.display_text(), "https://x.test/a");
    }

    #[test]
    fn test_citation_title_omitted_when_absent() {
        let json = serde_json::to_string(&Citation::new(None, "https://x.test")).unwrap();
        assert!(!json.contains("title"));
    }

    // ─── StoredTranscript Tests ──────────────────────────────

    #[test]
    fn test_stored_transcript_tags_schema() {
        let stored = StoredTranscript::new(vec![Message::user("q")]);
        assert_eq!(stored.schema, TRANSCRIPT_SCHEMA_VERSION);
        assert_eq!(stored.messages.len(), 1);
    }

    #[test]
    fn test_stored_transcript_roundtrip() {
        let stored = StoredTranscript::new(vec![
            Message::user("q"),
            Message::assistant("a"),
        ]);
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredTranscript = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schema, TRANSCRIPT_SCHEMA_VERSION);
        assert_eq!(back.messages.len(), 2);
        assert_eq!(back.messages[0].role, Role::User);
        assert_eq!(back.messages[1].role, Role::Assistant);
    }

    // ─── Identity Tests ──────────────────────────────────────

    #[test]
    fn test_identity_roundtrip() {
        let id = Identity::new("Al", "a@b.com");
        let json = serde_json::to_string(&id).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_default() {
        let config = WidgetConfig::default();
        assert!(!config.api_url.is_empty());
        assert!(!config.greeting.is_empty());
        assert!(!config.error_message.is_empty());
        assert!(!config.faqs.is_empty());
        assert!(config.require_identity);
        assert_eq!(config.history_window, 5);
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"api_url":"https://api.test/chat"}"#).unwrap();
        assert_eq!(config.api_url, "https://api.test/chat");
        assert!(!config.greeting.is_empty());
        assert_eq!(config.history_window, 5);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let e = WidgetError::RequestFailed(503);
        assert!(e.to_string().contains("503"));

        let e = WidgetError::NetworkUnavailable("dns".to_string());
        assert!(e.to_string().contains("network unavailable"));
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<Identity>("not json").unwrap_err();
        let e: WidgetError = parse_err.into();
        assert!(matches!(e, WidgetError::Serialization(_)));
    }

    #[test]
    fn test_validation_error_names_field() {
        let e = WidgetError::Validation {
            field: FormField::Email,
            message: "must contain @".to_string(),
        };
        assert!(e.to_string().contains("must contain @"));
        assert_eq!(FormField::Email.label(), "Email");
    }
}
