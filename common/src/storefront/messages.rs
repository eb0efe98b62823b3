use crate::model::catalog::{CatalogEntry, CatalogKind};
use crate::model::route::Route;
use crate::order::{CylinderSize, DeliveryMode, Ownership};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreMsg {
    Navigate(Route),
    OpenDetails(&'static CatalogEntry),
    StartOrder {
        entry: &'static CatalogEntry,
        variant: Option<String>,
    },
    /// The address bar changed outside the app (load, back/forward, edit).
    SyncFromFragment(String),
    ToggleMenu(CatalogKind),
    CloseMenus,
    ToggleMobileNav,
    SetCylinder(CylinderSize),
    SetOwnership(Ownership),
    SetDelivery(DeliveryMode),
    SetPhone(String),
    SetRegion(String),
    SetComment(String),
    DismissNotice(u64),
}
