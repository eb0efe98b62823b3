//! Order submission pipeline.
//!
//! The draft collects what the visitor typed, `can_submit` gates the send
//! button, `OrderPayload` turns the draft into the message text, and
//! `submit` holds the request state machine and response interpretation.

mod draft;
mod payload;
mod submit;

pub use draft::{can_submit, phone_digits, CylinderSize, DeliveryMode, OrderDraft, Ownership, MIN_PHONE_LEN};
pub use payload::OrderPayload;
pub use submit::{interpret_relay_response, Notice, NoticeKind, SubmitError, SubmitState, NOTICE_DISMISS_MS};
