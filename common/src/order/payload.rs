use super::draft::{CylinderSize, DeliveryMode, OrderDraft, Ownership};
use crate::nav::NavState;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Snapshot of an order at the moment it is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub product: String,
    pub description: String,
    pub cylinder: Option<CylinderSize>,
    pub ownership: Option<Ownership>,
    pub delivery: Option<DeliveryMode>,
    pub phone: String,
    pub region: String,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

impl OrderPayload {
    /// Builds the payload from the selected entry and the draft.
    pub fn compose(nav: &NavState, draft: &OrderDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            product: nav.product_title(),
            description: nav
                .selection
                .map(|entry| entry.description.to_string())
                .unwrap_or_default(),
            cylinder: draft.cylinder,
            ownership: draft.ownership,
            delivery: draft.delivery,
            phone: draft.phone.clone(),
            region: draft.region.clone(),
            comment: draft.comment.clone(),
            timestamp,
        }
    }

    /// Message relayed to the managers' chat, one field per line.
    pub fn message_text(&self) -> String {
        [
            "📦 Новая заявка".to_string(),
            format!("Товар/услуга: {}", self.product),
            format!("Описание: {}", or_dash(&self.description)),
            format!("Тара: {} л", display_or_dash(self.cylinder)),
            format!("Владение: {}", display_or_dash(self.ownership)),
            format!("Доставка: {}", display_or_dash(self.delivery)),
            format!("Телефон: {}", self.phone),
            format!("Регион: {}", or_dash(&self.region)),
            format!("Комментарий: {}", or_dash(&self.comment)),
            format!(
                "Время: {}",
                self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        ]
        .join("\n")
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn display_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
