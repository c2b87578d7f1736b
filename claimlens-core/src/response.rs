//! Checker response normalization
//!
//! The external checker's raw payload arrives in one of three shapes: a
//! numeric code/status envelope around a `data` field, a chat-completion
//! envelope whose message content embeds JSON (optionally fenced in a
//! markdown code block), or a flat object with the fields at top level.
//! Shape detection is an ordered decode into an explicit variant, with
//! [`RawShape::Unrecognized`] as the typed fallback instead of ad hoc
//! field probing.

use crate::error::CoreError;
use crate::verdict::Reference;
use serde_json::Value;

/// Normalized fields extracted from any recognized response shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckPayload {
    /// Provider's boolean judgement, if it gave a usable one
    pub result: Option<bool>,
    /// Provider's explanation
    pub reason: Option<String>,
    /// Provider confidence in [0, 1]
    pub factuality: Option<f64>,
    /// Cited sources, in provider order
    pub references: Vec<Reference>,
}

impl CheckPayload {
    /// Leniently read payload fields out of a JSON object
    ///
    /// Missing or wrongly-typed fields become `None`/empty rather than
    /// failing the whole payload; providers are not reliable enough to
    /// deserve strict decoding here.
    fn from_value(value: &Value) -> Self {
        let references = value
            .get("references")
            .and_then(|r| serde_json::from_value(r.clone()).ok())
            .unwrap_or_default();
        Self {
            result: value.get("result").and_then(Value::as_bool),
            reason: value
                .get("reason")
                .and_then(Value::as_str)
                .map(str::to_owned),
            factuality: value.get("factuality").and_then(Value::as_f64),
            references,
        }
    }
}

/// The recognized raw response shapes, plus a typed fallback
#[derive(Debug, Clone, PartialEq)]
pub enum RawShape {
    /// `{ "code": 200, "status": 20000, "data": { ... } }`
    Envelope(Value),
    /// `{ "choices": [{ "message": { "content": ... } }] }`; content is
    /// either an inline object or a JSON string, possibly markdown-fenced
    ChatCompletion(Value),
    /// `result` / `factuality` / `reason` already at top level
    Flat(Value),
    /// None of the known shapes matched
    Unrecognized,
}

impl RawShape {
    /// Classify a raw response, attempting the shapes in order
    pub fn detect(raw: &Value) -> Self {
        if let Some(data) = envelope_data(raw) {
            return RawShape::Envelope(data.clone());
        }
        if let Some(content) = chat_content(raw) {
            return RawShape::ChatCompletion(content.clone());
        }
        if raw.get("result").is_some() || raw.get("factuality").is_some() {
            return RawShape::Flat(raw.clone());
        }
        RawShape::Unrecognized
    }
}

/// Normalize a raw checker response into a [`CheckPayload`]
///
/// Returns [`CoreError::MalformedResponse`] when no known shape matches;
/// callers surface that as an error verdict rather than propagating it.
pub fn normalize(raw: &Value) -> Result<CheckPayload, CoreError> {
    match RawShape::detect(raw) {
        RawShape::Envelope(data) => Ok(CheckPayload::from_value(&data)),
        RawShape::ChatCompletion(content) => Ok(payload_from_content(&content)),
        RawShape::Flat(value) => Ok(CheckPayload::from_value(&value)),
        RawShape::Unrecognized => Err(CoreError::MalformedResponse),
    }
}

/// Extract the `data` field of a successful wrapper envelope
fn envelope_data(raw: &Value) -> Option<&Value> {
    let code = raw.get("code")?.as_i64()?;
    let status = raw.get("status")?.as_i64()?;
    if code == 200 && status == 20000 {
        raw.get("data")
    } else {
        None
    }
}

/// Extract the message content of a chat-completion envelope
fn chat_content(raw: &Value) -> Option<&Value> {
    raw.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")
}

/// Decode chat message content, which may be an object or a JSON string
///
/// An unparseable string still counts as an answer (the shape matched), so
/// it yields an empty payload and therefore an Unknown outcome, not an
/// error.
fn payload_from_content(content: &Value) -> CheckPayload {
    match content {
        Value::String(text) => match serde_json::from_str::<Value>(strip_code_fence(text)) {
            Ok(parsed) => CheckPayload::from_value(&parsed),
            Err(_) => CheckPayload::default(),
        },
        other => CheckPayload::from_value(other),
    }
}

/// Strip a surrounding ```` ```json ```` markdown fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
