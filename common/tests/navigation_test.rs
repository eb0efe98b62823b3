//! Integration tests for fragment routing
//!
//! These tests drive `Storefront` the way the browser adapter does: apply an
//! operation, then publish the fragment to a host, and feed external
//! fragment changes back through `sync_from_fragment`.

use common::model::catalog::{Catalog, CatalogEntry, CatalogKind};
use common::model::route::Route;
use common::nav::{fragment_to_state, state_to_fragment, FragmentHost, MemoryFragment, NavState};
use common::storefront::Storefront;
use proptest::prelude::*;

fn entry(kind: CatalogKind, id: &str) -> &'static CatalogEntry {
    Catalog::builtin().find(kind, id).unwrap()
}

/// Every state the controller can legitimately be in.
fn valid_states() -> Vec<NavState> {
    let catalog = Catalog::builtin();
    let mut states = Vec::new();
    for route in Route::ALL.into_iter().filter(|r| !r.is_detail()) {
        states.push(NavState {
            route,
            ..NavState::default()
        });
    }
    for entry in catalog.entries() {
        states.push(NavState {
            route: entry.kind.detail_route(),
            selection: Some(entry),
            variant: None,
        });
        states.push(NavState {
            route: Route::Order,
            selection: Some(entry),
            variant: entry.variants.first().map(|v| v.to_string()),
        });
    }
    states
}

#[test]
fn test_fragment_round_trip_for_every_valid_state() {
    let catalog = Catalog::builtin();
    for state in valid_states() {
        let fragment = state_to_fragment(&state);
        let restored = fragment_to_state(&fragment, &state, catalog);
        assert_eq!(restored, state, "round trip through {}", fragment);
    }
}

#[test]
fn test_load_with_equipment_details_fragment() {
    let mut store = Storefront::new(Catalog::builtin());
    let mut host = MemoryFragment::new("#equipment-details/eq-cylinders");

    store.sync_from_fragment(&host.current());
    store.publish(&mut host);

    assert_eq!(store.nav.route, Route::EquipmentDetails);
    assert_eq!(
        store.nav.selected_equipment(),
        Some(entry(CatalogKind::Equipment, "eq-cylinders"))
    );
    assert!(host.writes.is_empty(), "no redundant write on load");
}

#[test]
fn test_start_order_scenario() {
    let mut store = Storefront::new(Catalog::builtin());
    let mut host = MemoryFragment::new("");
    let o2 = entry(CatalogKind::Gas, "o2");
    assert_eq!(o2.formula, Some("O₂"));

    store.open_details(o2);
    store.publish(&mut host);
    store.start_order(o2, Some("99.7%".to_string()));
    store.publish(&mut host);

    assert_eq!(store.nav.route, Route::Order);
    assert_eq!(store.nav.variant.as_deref(), Some("99.7%"));
    assert_eq!(store.draft.cylinder, None);
    assert_eq!(store.draft.ownership, None);
    assert_eq!(store.draft.delivery, None);
    assert_eq!(store.draft.phone, "");
    assert_eq!(host.writes, vec!["#gas-details/o2", "#order"]);

    // The browser echoes our own write back as a hashchange event.
    store.sync_from_fragment("#order");
    assert_eq!(store.nav.variant.as_deref(), Some("99.7%"));
    assert!(!store.publish(&mut host));
}

#[test]
fn test_back_button_restores_previous_detail_page() {
    let mut store = Storefront::new(Catalog::builtin());
    let mut host = MemoryFragment::new("#home");

    store.open_details(entry(CatalogKind::Solution, "bar"));
    store.publish(&mut host);
    store.navigate(Route::Services);
    store.publish(&mut host);

    // Back: the browser restores the previous fragment.
    host.fragment = "#solution-details/bar".to_string();
    store.sync_from_fragment(&host.current());

    assert_eq!(store.nav.route, Route::SolutionDetails);
    assert_eq!(store.nav.selected_solution().map(|s| s.id), Some("bar"));
    assert!(!store.publish(&mut host));
}

#[test]
fn test_broken_link_is_rewritten_to_list_route() {
    let mut store = Storefront::new(Catalog::builtin());
    let mut host = MemoryFragment::new("#gas-details/unobtainium");

    store.sync_from_fragment(&host.current());
    store.publish(&mut host);

    assert_eq!(store.nav.route, Route::Gases);
    assert!(store.nav.selection.is_none());
    assert_eq!(host.writes, vec!["#gases"]);
}

#[test]
fn test_unknown_route_is_rewritten_to_home() {
    let mut store = Storefront::new(Catalog::builtin());
    store.open_details(entry(CatalogKind::Gas, "co2"));
    let mut host = MemoryFragment::new("#blog/post-1");

    store.sync_from_fragment(&host.current());
    store.publish(&mut host);

    assert_eq!(store.nav, NavState::default());
    assert_eq!(host.writes, vec!["#home"]);
}

fn route_strategy() -> impl Strategy<Value = Route> {
    prop::sample::select(Route::ALL.to_vec())
}

fn entry_strategy() -> impl Strategy<Value = &'static CatalogEntry> {
    prop::sample::select(Catalog::builtin().entries().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_navigate_to_non_detail_clears_selection(
        start in entry_strategy(),
        routes in prop::collection::vec(route_strategy(), 1..8),
    ) {
        let mut store = Storefront::new(Catalog::builtin());
        store.start_order(start, Some("x".to_string()));
        let mut last = Route::Order;
        for route in routes.into_iter().filter(|r| !r.is_detail()) {
            store.navigate(route);
            last = route;
            prop_assert!(store.nav.selection.is_none());
            prop_assert!(store.nav.variant.is_none());
        }
        if last != Route::Order {
            prop_assert_eq!(store.nav.route, last);
        }
    }

    #[test]
    fn prop_open_details_selects_exactly_that_entry(
        first in entry_strategy(),
        second in entry_strategy(),
    ) {
        let mut store = Storefront::new(Catalog::builtin());
        store.open_details(first);
        store.open_details(second);

        let filled: Vec<&CatalogEntry> = [
            store.nav.selected_gas(),
            store.nav.selected_solution(),
            store.nav.selected_service(),
            store.nav.selected_equipment(),
        ]
        .into_iter()
        .flatten()
        .collect();
        prop_assert_eq!(filled, vec![second]);
        prop_assert_eq!(store.nav.route, second.kind.detail_route());
    }

    #[test]
    fn prop_sync_is_idempotent(route in route_strategy(), pick in entry_strategy()) {
        let catalog = Catalog::builtin();
        let fragment = match route.detail_kind() {
            Some(kind) => format!("#{}/{}", route, catalog.table(kind)[0].id),
            None => format!("#{}/{}", route, pick.id),
        };
        let once = fragment_to_state(&fragment, &NavState::default(), catalog);
        let twice = fragment_to_state(&state_to_fragment(&once), &once, catalog);
        prop_assert_eq!(once, twice);
    }
}
