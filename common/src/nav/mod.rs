//! Navigation state: the current route, the selected catalog entry and the
//! selected variant, plus their two-way mapping to the URL fragment.
//!
//! `NavState` holds a single optional `&'static CatalogEntry`. The entry's
//! `kind` tells which of the four selection slots (gas, solution, service,
//! equipment) is filled, so at most one slot can ever be non-empty.
//!
//! Invariant kept by every mutation here: a `*-details` route always has a
//! selection of the matching kind. Requests that would break it fall back to
//! the parent list route.

mod fragment;
mod host;

pub use fragment::{fragment_to_state, parse_fragment, state_to_fragment};
pub use host::{publish, FragmentHost, MemoryFragment};

use crate::model::catalog::{Catalog, CatalogEntry, CatalogKind};
use crate::model::route::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub route: Route,
    pub selection: Option<&'static CatalogEntry>,
    pub variant: Option<String>,
}

impl NavState {
    pub fn selected_kind(&self) -> Option<CatalogKind> {
        self.selection.map(|entry| entry.kind)
    }

    fn selected_of(&self, kind: CatalogKind) -> Option<&'static CatalogEntry> {
        self.selection.filter(|entry| entry.kind == kind)
    }

    pub fn selected_gas(&self) -> Option<&'static CatalogEntry> {
        self.selected_of(CatalogKind::Gas)
    }

    pub fn selected_solution(&self) -> Option<&'static CatalogEntry> {
        self.selected_of(CatalogKind::Solution)
    }

    pub fn selected_service(&self) -> Option<&'static CatalogEntry> {
        self.selected_of(CatalogKind::Service)
    }

    pub fn selected_equipment(&self) -> Option<&'static CatalogEntry> {
        self.selected_of(CatalogKind::Equipment)
    }

    /// Selected entry name, followed by ` — <variant>` when a variant was
    /// chosen. Empty when nothing is selected.
    pub fn product_title(&self) -> String {
        match (self.selection, self.variant.as_deref()) {
            (Some(entry), Some(variant)) => format!("{} — {}", entry.name, variant),
            (Some(entry), None) => entry.name.to_string(),
            (None, _) => String::new(),
        }
    }

    /// Switches to `route`.
    ///
    /// Non-detail routes clear the selection and the variant. A detail route
    /// keeps the current selection when it has the matching kind and falls
    /// back to the list route otherwise.
    pub fn navigate(&mut self, route: Route) {
        match route.detail_kind() {
            Some(kind) if self.selected_kind() == Some(kind) => {
                self.route = route;
            }
            Some(kind) => {
                self.clear_selection();
                self.route = kind.list_route();
            }
            None => {
                self.clear_selection();
                self.route = route;
            }
        }
    }

    /// Shows the details page of `entry`.
    pub fn open_details(&mut self, entry: &'static CatalogEntry) {
        self.selection = Some(entry);
        self.variant = None;
        self.route = entry.kind.detail_route();
    }

    /// Selects `entry` for ordering and moves to the order route.
    pub fn select_for_order(&mut self, entry: &'static CatalogEntry, variant: Option<String>) {
        self.selection = Some(entry);
        self.variant = variant.filter(|label| !label.is_empty());
        self.route = Route::Order;
    }

    /// Replaces the state with the one described by `fragment`.
    pub fn sync_from_fragment(&mut self, fragment: &str, catalog: &Catalog) {
        *self = fragment_to_state(fragment, self, catalog);
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.variant = None;
    }
}
