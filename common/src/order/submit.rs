use crate::requests::RelayAck;
use thiserror::Error;

/// How long a notice stays on screen, in milliseconds.
pub const NOTICE_DISMISS_MS: u32 = 4_500;

/// Progress of the single in-flight order request.
///
/// `Pending` disables the send button, which is what prevents a double
/// click from sending the same order twice. It remembers which order form
/// was sent so the outcome is not applied to a form opened later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending { session: u64 },
    Done,
    Failed,
}

impl SubmitState {
    pub fn is_pending(self) -> bool {
        matches!(self, SubmitState::Pending { .. })
    }
}

/// Why an order did not reach the chat. All variants are shown to the
/// visitor as the same generic failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("forwarding endpoint answered HTTP {0}")]
    Status(u16),
    #[error("forwarding endpoint response not understood: {0}")]
    MalformedResponse(String),
    #[error("forwarding endpoint rejected the order: {0}")]
    Rejected(String),
}

/// Maps the forwarding endpoint's answer to an outcome. Only a 2xx status
/// with `{"ok": true}` counts as delivered.
pub fn interpret_relay_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Status(status));
    }
    let ack: RelayAck =
        serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
    if ack.ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected(
            ack.error.unwrap_or_else(|| "no reason given".to_string()),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes notices so a dismiss timer only closes its own.
    pub id: u64,
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub fn sent(id: u64) -> Self {
        Self {
            id,
            kind: NoticeKind::Success,
            title: "ЗАЯВКА ОТПРАВЛЕНА",
            description: "Менеджер свяжется с вами",
        }
    }

    pub fn failed(id: u64) -> Self {
        Self {
            id,
            kind: NoticeKind::Error,
            title: "ОШИБКА",
            description: "Не удалось отправить. Проверьте интернет и попробуйте ещё раз.",
        }
    }
}
