//! HTTP answer client.
//!
//! One JSON POST per question against the configured answering endpoint,
//! using browser `fetch()` via gloo-net for WASM compatibility. No client
//! timeout; the transport's own default governs worst-case latency.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use widget_core::ports::{AnswerPort, AnswerRequest};
use widget_types::message::{Answer, Citation, Role};
use widget_types::{Result, WidgetError};

pub struct HttpAnswerClient {
    api_url: String,
}

impl HttpAnswerClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl AnswerPort for HttpAnswerClient {
    async fn ask(&self, req: AnswerRequest) -> Result<Answer> {
        let body = build_request_body(&req);

        let response = Request::post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| WidgetError::NetworkUnavailable(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::NetworkUnavailable(e.to_string()))?;

        if !response.ok() {
            return Err(WidgetError::RequestFailed(response.status()));
        }

        let data: ApiAnswer = response
            .json()
            .await
            .map_err(|e| WidgetError::MalformedResponse(e.to_string()))?;

        let text = data
            .answer
            .ok_or_else(|| WidgetError::MalformedResponse("body missing answer".to_string()))?;

        let citations = data
            .citations
            .unwrap_or_default()
            .into_iter()
            .map(|c| Citation::new(c.title, c.url))
            .collect();

        Ok(Answer { text, citations })
    }
}

/// Build the wire body: question always, identity and session id when
/// present, history only when non-empty.
pub fn build_request_body(req: &AnswerRequest) -> Value {
    let mut body = json!({ "question": req.question });

    if let Some(identity) = &req.identity {
        body["name"] = json!(identity.name);
        body["email"] = json!(identity.email);
    }

    if let Some(session_id) = &req.session_id {
        body["sessionId"] = json!(session_id);
    }

    if !req.history.is_empty() {
        let turns: Vec<Value> = req
            .history
            .iter()
            .map(|t| {
                json!({
                    "role": role_str(t.role),
                    "content": t.content,
                })
            })
            .collect();
        body["history"] = json!(turns);
    }

    body
}

fn role_str(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiAnswer {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    citations: Option<Vec<ApiCitation>>,
}

#[derive(Deserialize)]
struct ApiCitation {
    #[serde(default)]
    title: Option<String>,
    url: String,
}
