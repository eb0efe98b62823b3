use crate::model::catalog::CatalogKind;
use crate::site::DEFAULT_REGION;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum phone length, in characters, accepted by the order form.
pub const MIN_PHONE_LEN: usize = 6;

/// Cylinder volume offered on the order form, in litres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CylinderSize {
    L5,
    L10,
    L25,
    L40,
    L50,
}

impl CylinderSize {
    pub const ALL: [CylinderSize; 5] = [
        CylinderSize::L5,
        CylinderSize::L10,
        CylinderSize::L25,
        CylinderSize::L40,
        CylinderSize::L50,
    ];

    pub fn litres(self) -> u32 {
        match self {
            CylinderSize::L5 => 5,
            CylinderSize::L10 => 10,
            CylinderSize::L25 => 25,
            CylinderSize::L40 => 40,
            CylinderSize::L50 => 50,
        }
    }
}

impl fmt::Display for CylinderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.litres())
    }
}

/// Whose cylinder is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    CustomerOwned,
    CompanyOwned,
}

impl Ownership {
    pub const ALL: [Ownership; 2] = [Ownership::CustomerOwned, Ownership::CompanyOwned];

    pub fn label(self) -> &'static str {
        match self {
            Ownership::CustomerOwned => "Мой баллон",
            Ownership::CompanyOwned => "Баллон компании",
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    Pickup,
    Courier,
}

impl DeliveryMode {
    pub const ALL: [DeliveryMode; 2] = [DeliveryMode::Pickup, DeliveryMode::Courier];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryMode::Pickup => "Самовывоз",
            DeliveryMode::Courier => "Доставка",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order form contents. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub cylinder: Option<CylinderSize>,
    pub ownership: Option<Ownership>,
    pub delivery: Option<DeliveryMode>,
    pub phone: String,
    pub region: String,
    pub comment: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            cylinder: None,
            ownership: None,
            delivery: None,
            phone: String::new(),
            region: DEFAULT_REGION.to_string(),
            comment: String::new(),
        }
    }
}

impl OrderDraft {
    /// Clears the form for a new order. The region is carried over.
    pub fn reset(&mut self) {
        let region = std::mem::take(&mut self.region);
        *self = OrderDraft {
            region,
            ..OrderDraft::default()
        };
    }
}

/// Whether `draft` is complete enough to send for an entry of `kind`.
///
/// Every order needs a phone of at least `MIN_PHONE_LEN` characters. Gas
/// orders also need cylinder size, ownership and delivery. Without a
/// selected entry there is nothing to order.
pub fn can_submit(kind: Option<CatalogKind>, draft: &OrderDraft) -> bool {
    let Some(kind) = kind else {
        return false;
    };
    let phone_ok = draft.phone.chars().count() >= MIN_PHONE_LEN;
    if kind.skips_order_steps() {
        phone_ok
    } else {
        phone_ok && draft.cylinder.is_some() && draft.ownership.is_some() && draft.delivery.is_some()
    }
}

/// Number of digits in a phone string, used for the "looks incomplete"
/// hint under the phone field.
pub fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_gas_draft() -> OrderDraft {
        OrderDraft {
            cylinder: Some(CylinderSize::L40),
            ownership: Some(Ownership::CompanyOwned),
            delivery: Some(DeliveryMode::Courier),
            phone: "+7 926 000 00 00".to_string(),
            ..OrderDraft::default()
        }
    }

    #[test]
    fn short_phone_blocks_every_kind() {
        let mut draft = complete_gas_draft();
        draft.phone = "12345".to_string();
        for kind in CatalogKind::ALL {
            assert!(!can_submit(Some(kind), &draft), "{}", kind);
        }
    }

    #[test]
    fn gas_orders_need_every_cylinder_step() {
        assert!(can_submit(Some(CatalogKind::Gas), &complete_gas_draft()));

        let mut draft = complete_gas_draft();
        draft.cylinder = None;
        assert!(!can_submit(Some(CatalogKind::Gas), &draft));

        let mut draft = complete_gas_draft();
        draft.ownership = None;
        assert!(!can_submit(Some(CatalogKind::Gas), &draft));

        let mut draft = complete_gas_draft();
        draft.delivery = None;
        assert!(!can_submit(Some(CatalogKind::Gas), &draft));
    }

    #[test]
    fn other_kinds_need_only_a_phone() {
        let draft = OrderDraft {
            phone: "123456".to_string(),
            ..OrderDraft::default()
        };
        assert!(can_submit(Some(CatalogKind::Service), &draft));
        assert!(can_submit(Some(CatalogKind::Equipment), &draft));
        assert!(can_submit(Some(CatalogKind::Solution), &draft));
        assert!(!can_submit(Some(CatalogKind::Gas), &draft));
    }

    #[test]
    fn nothing_selected_cannot_be_submitted() {
        assert!(!can_submit(None, &complete_gas_draft()));
    }

    #[test]
    fn phone_length_counts_characters_not_bytes() {
        let draft = OrderDraft {
            phone: "тел 12".to_string(),
            ..OrderDraft::default()
        };
        assert!(can_submit(Some(CatalogKind::Service), &draft));
    }

    #[test]
    fn reset_keeps_region() {
        let mut draft = complete_gas_draft();
        draft.region = "Тула".to_string();
        draft.comment = "после обеда".to_string();
        draft.reset();
        assert_eq!(
            draft,
            OrderDraft {
                region: "Тула".to_string(),
                ..OrderDraft::default()
            }
        );
    }

    #[test]
    fn phone_digits_ignores_formatting() {
        assert_eq!(phone_digits("+7 (926) 975-84-04"), 11);
        assert_eq!(phone_digits(""), 0);
    }
}
