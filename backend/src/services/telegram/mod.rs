//! # Telegram Relay Service Module
//!
//! Groups the order forwarding endpoint under `/api`.
//!
//! ## Sub-modules:
//! - `send`: HTTP handler validating the request and replying with a `RelayAck`.
//! - `client`: `ChatRelay` trait and its Telegram Bot API implementation.
//! - `error`: `RelayError` and its mapping to HTTP status codes.

mod client;
mod error;
mod send;

pub use client::{ChatRelay, TelegramClient};
pub use error::RelayError;

use actix_web::web::{post, route, scope};
use actix_web::Scope;

/// The base path for the relay endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the relay routes.
///
/// # Registered Routes:
///
/// *   **`POST /send-telegram`**:
///     - **Handler**: `send::process`
///     - **Description**: Relays `{"text": ...}` to the managers' chat through
///       the `ChatRelay` stored in the app data.
///
/// *   **any other method on `/send-telegram`**:
///     - **Handler**: `send::method_not_allowed`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/send-telegram", post().to(send::process))
        .route("/send-telegram", route().to(send::method_not_allowed))
}
