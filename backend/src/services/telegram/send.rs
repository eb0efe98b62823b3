//! # Order Forwarding Handler
//!
//! Backs `POST /api/send-telegram`. The storefront posts `{"text": "..."}`
//! and the handler relays the text unchanged through the registered
//! `ChatRelay`. Secrets never leave the server.
//!
//! Responses:
//! - `200 {"ok":true}` once the chat accepted the message;
//! - `400 {"ok":false,"error":...}` for a body that is not JSON or has no text;
//! - `500 {"ok":false,"error":...}` for missing credentials or a failed relay;
//! - `405 Method Not Allowed` for any other method on the same path.

use super::client::ChatRelay;
use super::error::RelayError;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{RelayAck, SendTelegramRequest};
use log::info;

/// Validates the request body and forwards its text.
pub async fn process(
    relay: web::Data<dyn ChatRelay>,
    body: web::Bytes,
) -> Result<HttpResponse, RelayError> {
    let request: SendTelegramRequest =
        serde_json::from_slice(&body).map_err(|_| RelayError::InvalidJson)?;
    if request.text.trim().is_empty() {
        return Err(RelayError::MissingText);
    }

    relay.send_message(&request.text).await?;
    info!("Order relayed ({} chars)", request.text.chars().count());
    Ok(HttpResponse::Ok().json(RelayAck::success()))
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().body("Method Not Allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::telegram::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy)]
    enum Outcome {
        Delivered,
        NoCredentials,
        Rejected,
    }

    struct FakeRelay {
        outcome: Outcome,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatRelay for FakeRelay {
        async fn send_message(&self, text: &str) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(text.to_string());
            match self.outcome {
                Outcome::Delivered => Ok(()),
                Outcome::NoCredentials => Err(RelayError::MissingCredentials),
                Outcome::Rejected => Err(RelayError::Upstream {
                    data: json!({"ok": false, "description": "Forbidden: bot was blocked"}),
                }),
            }
        }
    }

    fn relay(outcome: Outcome) -> Arc<FakeRelay> {
        Arc::new(FakeRelay {
            outcome,
            sent: Mutex::new(Vec::new()),
        })
    }

    async fn call(relay: Arc<FakeRelay>, req: test::TestRequest) -> (StatusCode, Value) {
        let data: web::Data<dyn ChatRelay> = web::Data::from(relay as Arc<dyn ChatRelay>);
        let app = test::init_service(App::new().app_data(data).service(configure_routes())).await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn post(body: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/send-telegram")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_string())
    }

    #[actix_web::test]
    async fn relays_text_and_acknowledges() {
        let fake = relay(Outcome::Delivered);
        let (status, body) = call(fake.clone(), post(r#"{"text":"📦 Новая заявка"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
        assert_eq!(*fake.sent.lock().unwrap(), vec!["📦 Новая заявка".to_string()]);
    }

    #[actix_web::test]
    async fn missing_text_is_a_client_error() {
        let fake = relay(Outcome::Delivered);
        let (status, body) = call(fake.clone(), post("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"ok": false, "error": "No text provided"}));
        assert!(fake.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn blank_text_is_a_client_error() {
        let (status, _) = call(relay(Outcome::Delivered), post(r#"{"text":"   "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_json_is_a_client_error() {
        let (status, body) = call(relay(Outcome::Delivered), post("text=hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], json!(false));
    }

    #[actix_web::test]
    async fn get_is_not_allowed() {
        let fake = relay(Outcome::Delivered);
        let data: web::Data<dyn ChatRelay> = web::Data::from(fake as Arc<dyn ChatRelay>);
        let app = test::init_service(App::new().app_data(data).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/send-telegram").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(test::read_body(resp).await, "Method Not Allowed");
    }

    #[actix_web::test]
    async fn missing_credentials_is_a_server_error() {
        let (status, body) = call(relay(Outcome::NoCredentials), post(r#"{"text":"hi"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"ok": false, "error": "Server configuration error"}));
    }

    #[actix_web::test]
    async fn upstream_rejection_passes_telegram_answer_through() {
        let (status, body) = call(relay(Outcome::Rejected), post(r#"{"text":"hi"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Telegram API error"));
        assert_eq!(body["data"]["description"], json!("Forbidden: bot was blocked"));
    }
}
