//! Pure conversions between `NavState` and the URL fragment.
//!
//! Grammar: `#<route>` or `#<route>/<id>`. The leading `#` is optional on
//! input and an empty fragment means `home`.

use super::NavState;
use crate::model::catalog::Catalog;
use crate::model::route::Route;
use log::warn;

/// Canonical fragment for `state`, always starting with `#`.
///
/// Detail routes get `/<id>` appended when an entry is selected.
pub fn state_to_fragment(state: &NavState) -> String {
    match (state.route.is_detail(), state.selection) {
        (true, Some(entry)) => format!("#{}/{}", state.route.token(), entry.id),
        _ => format!("#{}", state.route.token()),
    }
}

/// Splits a fragment into its route token and optional id.
///
/// Segments after the id are ignored.
pub fn parse_fragment(fragment: &str) -> (&str, Option<&str>) {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut segments = path.split('/');
    let token = segments.next().unwrap_or_default();
    let id = segments.next().filter(|id| !id.is_empty());
    if token.is_empty() {
        ("home", id)
    } else {
        (token, id)
    }
}

/// State described by `fragment`, given the state currently displayed.
///
/// - list and page routes: selection and variant cleared;
/// - `order`: route set, selection and variant kept from `current`;
/// - `*-details/<id>`: entry looked up in the matching table. The variant is
///   kept only when the entry is the one already selected. An id that does
///   not resolve falls back to the parent list route;
/// - anything else: `home` with the selection cleared.
pub fn fragment_to_state(fragment: &str, current: &NavState, catalog: &Catalog) -> NavState {
    let (token, id) = parse_fragment(fragment);
    let route = Route::from_token(token);

    if route == Route::Order {
        return NavState {
            route,
            ..current.clone()
        };
    }

    let Some(kind) = route.detail_kind() else {
        return NavState {
            route,
            selection: None,
            variant: None,
        };
    };

    match id.and_then(|id| catalog.find(kind, id)) {
        Some(entry) => {
            let variant = if current.selection == Some(entry) {
                current.variant.clone()
            } else {
                None
            };
            NavState {
                route,
                selection: Some(entry),
                variant,
            }
        }
        None => {
            warn!(
                "No {} entry for fragment {:?}, showing {} list",
                kind,
                fragment,
                kind.list_route()
            );
            NavState {
                route: kind.list_route(),
                selection: None,
                variant: None,
            }
        }
    }
}
