use std::fmt::{Display, Formatter};

/// Delivery pipeline for an email: `Outgoing` is the transactional route,
/// `Broadcast` the marketing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Outgoing,
    Broadcast,
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Outgoing => write!(f, "outgoing"),
            Route::Broadcast => write!(f, "broadcast"),
        }
    }
}

/// A single attachment. `content` is expected to be base64-encoded by the
/// caller; this layer does not validate the encoding.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub content: String,
    /// Used to reference the attachment inline, e.g. `<img src="cid:...">`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// The JSON payload accepted by the send endpoints.
///
/// Field names serialize in lower camel case and unset optional fields are
/// omitted from the body entirely, never emitted as `null`. The idempotency
/// key is transport-level only: it never enters the body and travels as the
/// `Idempotency-Key` header instead.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip)]
    pub idempotency_key: Option<String>,
}

/// What the API reports back for an accepted email.
///
/// Fields beyond `messageId` and `status` are kept in `extra` and passed
/// through untouched, so additions on the API side never break callers.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponse {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
