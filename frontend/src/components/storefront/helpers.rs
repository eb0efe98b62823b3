//! Browser glue for the storefront component.
//!
//! - **Fragment host**: `BrowserFragment` exposes `window.location.hash` as a
//!   `FragmentHost`, so the state core can publish the canonical fragment.
//!   Writing the hash adds a history entry, which keeps back/forward working.
//! - **Order request**: `send_order` posts the message to the forwarding
//!   endpoint and folds every outcome into `Result<(), SubmitError>`.
//! - **Clock and scrolling**: `now` and `scroll_to_top`.

use chrono::{DateTime, Utc};
use common::nav::FragmentHost;
use common::order::{interpret_relay_response, SubmitError};
use common::requests::SendTelegramRequest;
use gloo_net::http::Request;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Path of the forwarding endpoint served by the backend.
pub const SEND_ORDER_PATH: &str = "/api/send-telegram";

/// `window.location.hash` as a fragment host.
pub struct BrowserFragment;

impl FragmentHost for BrowserFragment {
    fn current(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn write(&mut self, fragment: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(fragment).is_err() {
                gloo_console::warn!(format!("Could not set location hash to {}", fragment));
            }
        }
    }
}

/// POSTs `request` to the forwarding endpoint.
pub async fn send_order(request: &SendTelegramRequest) -> Result<(), SubmitError> {
    let response = Request::post(SEND_ORDER_PATH)
        .json(request)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    gloo_console::debug!(format!("Forwarding endpoint answered {}: {}", status, body));

    interpret_relay_response(status, &body)
}

/// Current time from the browser clock.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
