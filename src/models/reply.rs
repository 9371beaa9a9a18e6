use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Message carried in the `error` field of a failing backend reply.
///
/// Non-string values are shown as their JSON text. Missing, null, false, zero
/// and empty values carry no message.
pub fn backend_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Browser-facing compatibility reply: only `response` survives.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}
