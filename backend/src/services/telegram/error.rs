use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::RelayAck;
use serde_json::Value;
use thiserror::Error;

/// Every way a relay request can fail, mapped onto the endpoint's HTTP
/// contract by `ResponseError`.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("No text provided")]
    MissingText,

    #[error("Server configuration error")]
    MissingCredentials,

    /// Telegram answered with a non-2xx status or `ok != true`.
    #[error("Telegram API error")]
    Upstream { data: Value },

    #[error("Server error")]
    Transport(String),
}

impl RelayError {
    pub fn ack(&self) -> RelayAck {
        let ack = RelayAck::failure(self.to_string());
        match self {
            RelayError::Upstream { data } => ack.with_data(data.clone()),
            _ => ack,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidJson | RelayError::MissingText => StatusCode::BAD_REQUEST,
            RelayError::MissingCredentials
            | RelayError::Upstream { .. }
            | RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.ack())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}
