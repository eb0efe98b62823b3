//! # Telegram Bot API Client
//!
//! `ChatRelay` is the seam between the HTTP handler and the messaging
//! service. `TelegramClient` implements it with a single
//! `POST {api_base}/bot{token}/sendMessage` call per message:
//!
//! ```json
//! { "chat_id": "<chat>", "text": "<message>" }
//! ```
//!
//! The text goes out as plain text. It carries visitor input verbatim, so
//! no `parse_mode` is set.
//!
//! The call succeeds only when Telegram answers with a 2xx status *and* a JSON
//! body whose `ok` field is `true`. Anything else is reported as
//! `RelayError::Upstream` with Telegram's answer attached. Network failures
//! and unreadable answers become `RelayError::Transport`.

use super::error::RelayError;
use crate::config::TelegramConfig;
use async_trait::async_trait;
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::Value;

/// Delivers one text message to the managers' chat.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), RelayError>;
}

pub struct TelegramClient {
    http: reqwest::Client,
    config: TelegramConfig,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(config: TelegramConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.config.api_base, token)
    }
}

#[async_trait]
impl ChatRelay for TelegramClient {
    async fn send_message(&self, text: &str) -> Result<(), RelayError> {
        let (Some(token), Some(chat_id)) = (&self.config.bot_token, &self.config.chat_id) else {
            error!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set");
            return Err(RelayError::MissingCredentials);
        };

        let response = self
            .http
            .post(self.endpoint(token))
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        let data: Value = response.json().await?;
        debug!("Telegram API response ({}): {}", status, data);

        if status.is_success() && data.get("ok") == Some(&Value::Bool(true)) {
            Ok(())
        } else {
            warn!("Telegram rejected the message ({}): {}", status, data);
            Err(RelayError::Upstream { data })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Seen = Arc<Mutex<Vec<(String, Value)>>>;

    /// Starts a stand-in for the Bot API on an ephemeral port that answers
    /// every request with `status` and `answer`, recording what it received.
    fn fake_telegram(status: u16, answer: Value) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let recorder = seen.clone();
        let server = HttpServer::new(move || {
            let recorder = recorder.clone();
            let answer = answer.clone();
            App::new().default_service(web::to(
                move |req: actix_web::HttpRequest, body: web::Json<Value>| {
                    let recorder = recorder.clone();
                    let answer = answer.clone();
                    async move {
                        recorder
                            .lock()
                            .unwrap()
                            .push((req.path().to_string(), body.into_inner()));
                        HttpResponse::build(
                            actix_web::http::StatusCode::from_u16(status).unwrap(),
                        )
                        .json(answer)
                    }
                },
            ))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        (format!("http://{}", addr), seen)
    }

    fn client(api_base: String, token: Option<&str>) -> TelegramClient {
        TelegramClient::new(TelegramConfig {
            bot_token: token.map(str::to_string),
            chat_id: Some("-1001".to_string()),
            api_base,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn sends_plain_text_message_to_configured_chat() {
        let (base, seen) = fake_telegram(200, json!({"ok": true, "result": {}}));

        client(base, Some("42:abc")).send_message("hello").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/bot42:abc/sendMessage");
        assert_eq!(
            seen[0].1,
            json!({"chat_id": "-1001", "text": "hello"})
        );
    }

    #[actix_web::test]
    async fn markup_characters_pass_through_untouched() {
        let (base, seen) = fake_telegram(200, json!({"ok": true, "result": {}}));
        let text = "Комментарий: ООО_Газ, 5*40 [срочно]";

        client(base, Some("42:abc")).send_message(text).await.unwrap();

        let seen = seen.lock().unwrap();
        let body = &seen[0].1;
        assert_eq!(body["text"], text);
        assert!(body.get("parse_mode").is_none());
    }

    #[actix_web::test]
    async fn ok_false_is_an_upstream_error() {
        let answer = json!({"ok": false, "description": "Bad Request: chat not found"});
        let (base, _) = fake_telegram(200, answer.clone());

        let err = client(base, Some("42:abc")).send_message("hello").await.unwrap_err();

        assert!(matches!(err, RelayError::Upstream { data } if data == answer));
    }

    #[actix_web::test]
    async fn non_success_status_is_an_upstream_error() {
        let (base, _) = fake_telegram(401, json!({"ok": false, "error_code": 401}));
        let err = client(base, Some("bad")).send_message("hello").await.unwrap_err();
        assert!(matches!(err, RelayError::Upstream { .. }));
    }

    #[actix_web::test]
    async fn missing_token_never_reaches_the_network() {
        let (base, seen) = fake_telegram(200, json!({"ok": true}));
        let err = client(base, None).send_message("hello").await.unwrap_err();

        assert!(matches!(err, RelayError::MissingCredentials));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unreachable_api_is_a_transport_error() {
        let err = client("http://127.0.0.1:9".to_string(), Some("42:abc"))
            .send_message("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
