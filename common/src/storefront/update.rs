use super::messages::StoreMsg;
use super::state::Storefront;

/// Applies `msg` to `store`. Returns `true` when the view should re-render.
pub fn update(store: &mut Storefront, msg: StoreMsg) -> bool {
    match msg {
        StoreMsg::Navigate(route) => {
            store.navigate(route);
            true
        }
        StoreMsg::OpenDetails(entry) => {
            store.open_details(entry);
            true
        }
        StoreMsg::StartOrder { entry, variant } => {
            store.start_order(entry, variant);
            true
        }
        StoreMsg::SyncFromFragment(fragment) => {
            let before = store.nav.clone();
            store.sync_from_fragment(&fragment);
            store.nav != before
        }
        StoreMsg::ToggleMenu(kind) => {
            store.toggle_menu(kind);
            true
        }
        StoreMsg::CloseMenus => {
            let changed = store.open_menu.is_some() || store.mobile_nav_open;
            store.close_menus();
            changed
        }
        StoreMsg::ToggleMobileNav => {
            store.mobile_nav_open = !store.mobile_nav_open;
            true
        }
        StoreMsg::SetCylinder(size) => {
            store.draft.cylinder = Some(size);
            true
        }
        StoreMsg::SetOwnership(ownership) => {
            store.draft.ownership = Some(ownership);
            true
        }
        StoreMsg::SetDelivery(delivery) => {
            store.draft.delivery = Some(delivery);
            true
        }
        StoreMsg::SetPhone(phone) => {
            store.draft.phone = phone;
            true
        }
        StoreMsg::SetRegion(region) => {
            store.draft.region = region;
            true
        }
        StoreMsg::SetComment(comment) => {
            store.draft.comment = comment;
            true
        }
        StoreMsg::DismissNotice(id) => store.dismiss_notice(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Catalog, CatalogKind};
    use crate::model::route::Route;

    #[test]
    fn fragment_echo_does_not_rerender() {
        let mut store = Storefront::new(Catalog::builtin());
        update(&mut store, StoreMsg::Navigate(Route::Contacts));

        assert!(!update(&mut store, StoreMsg::SyncFromFragment("#contacts".to_string())));
        assert!(update(&mut store, StoreMsg::SyncFromFragment("#gases".to_string())));
    }

    #[test]
    fn close_menus_reports_change_once() {
        let mut store = Storefront::new(Catalog::builtin());
        update(&mut store, StoreMsg::ToggleMenu(CatalogKind::Equipment));
        assert_eq!(store.open_menu, Some(CatalogKind::Equipment));

        assert!(update(&mut store, StoreMsg::CloseMenus));
        assert!(!update(&mut store, StoreMsg::CloseMenus));
    }

    #[test]
    fn toggling_same_menu_closes_it() {
        let mut store = Storefront::new(Catalog::builtin());
        update(&mut store, StoreMsg::ToggleMenu(CatalogKind::Gas));
        update(&mut store, StoreMsg::ToggleMenu(CatalogKind::Gas));
        assert_eq!(store.open_menu, None);
    }

    #[test]
    fn form_messages_fill_the_draft() {
        let mut store = Storefront::new(Catalog::builtin());
        let o2 = Catalog::builtin().find(CatalogKind::Gas, "o2").unwrap();
        update(&mut store, StoreMsg::StartOrder { entry: o2, variant: None });
        update(&mut store, StoreMsg::SetCylinder(crate::order::CylinderSize::L50));
        update(&mut store, StoreMsg::SetOwnership(crate::order::Ownership::CustomerOwned));
        update(&mut store, StoreMsg::SetDelivery(crate::order::DeliveryMode::Pickup));
        update(&mut store, StoreMsg::SetPhone("8 800 555 35 35".to_string()));

        assert!(store.can_submit());
    }
}
