use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for the `/api/send-telegram` forwarding endpoint.
/// A body without `text` deserializes to an empty string, which the
/// endpoint rejects with `400`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendTelegramRequest {
    #[serde(default)]
    pub text: String,
}

/// Acknowledgement returned by the forwarding endpoint.
///
/// Success is `{"ok": true}`; failures add an `error` message and, for
/// upstream rejections, the raw Telegram answer in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayAck {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RelayAck {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
            data: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_reads_as_empty() {
        let request: SendTelegramRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_empty());
    }

    #[test]
    fn success_ack_is_just_ok() {
        let json = serde_json::to_string(&RelayAck::success()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn failure_ack_carries_error_and_data() {
        let ack = RelayAck::failure("Telegram API error")
            .with_data(serde_json::json!({ "ok": false, "error_code": 400 }));
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "Telegram API error");
        assert_eq!(value["data"]["error_code"], 400);
    }
}
