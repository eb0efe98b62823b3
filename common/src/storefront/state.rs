//! State held at the root of the site and the operations that change it.
//!
//! Every public operation leaves `nav`, `draft`, `submit` and `notice`
//! consistent in one call, so whoever publishes the fragment afterwards
//! observes the final values only.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::model::catalog::{Catalog, CatalogEntry, CatalogKind};
use crate::model::route::Route;
use crate::nav::{self, FragmentHost, NavState};
use crate::order::{can_submit, Notice, OrderDraft, OrderPayload, SubmitError, SubmitState};
use crate::requests::SendTelegramRequest;

#[derive(Debug, Clone)]
pub struct Storefront {
    /// Catalog the fragment ids are resolved against.
    pub catalog: &'static Catalog,

    /// Route, selected entry and selected variant.
    pub nav: NavState,

    /// Order form contents. Reset when the order view is entered or left.
    pub draft: OrderDraft,

    /// State of the order request.
    pub submit: SubmitState,

    /// Toast currently on screen, if any.
    pub notice: Option<Notice>,

    /// Header dropdown currently expanded.
    pub open_menu: Option<CatalogKind>,

    /// Whether the mobile navigation panel is expanded.
    pub mobile_nav_open: bool,

    next_notice_id: u64,

    /// Bumped whenever a fresh order form is started.
    order_session: u64,
}

impl Storefront {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            nav: NavState::default(),
            draft: OrderDraft::default(),
            submit: SubmitState::Idle,
            notice: None,
            open_menu: None,
            mobile_nav_open: false,
            next_notice_id: 0,
            order_session: 0,
        }
    }

    /// Whether the send button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submit.is_pending() && can_submit(self.nav.selected_kind(), &self.draft)
    }

    /// Services, equipment and solutions skip the cylinder steps of the form.
    pub fn skip_order_steps(&self) -> bool {
        self.nav
            .selected_kind()
            .is_some_and(CatalogKind::skips_order_steps)
    }

    /// Product title as shown on the order form and sent in the message.
    pub fn product_title(&self) -> String {
        self.nav.product_title()
    }

    pub fn navigate(&mut self, route: Route) {
        self.transition(|nav| nav.navigate(route));
        self.close_menus();
    }

    pub fn open_details(&mut self, entry: &'static CatalogEntry) {
        self.transition(|nav| nav.open_details(entry));
        self.close_menus();
    }

    /// Starts a fresh order for `entry`, optionally qualified by a variant.
    pub fn start_order(&mut self, entry: &'static CatalogEntry, variant: Option<String>) {
        self.transition(|nav| nav.select_for_order(entry, variant));
        self.fresh_draft();
        self.close_menus();
    }

    /// Like `start_order` for callers that only hold an identifier. The id
    /// is classified by table membership (gas, solution, service, equipment).
    /// Returns `false` and leaves the state untouched when no table has it.
    pub fn start_order_by_id(&mut self, id: &str, variant: Option<String>) -> bool {
        match self.catalog.classify(id) {
            Some(entry) => {
                self.start_order(entry, variant);
                true
            }
            None => {
                warn!("Cannot order unknown catalog id {:?}", id);
                false
            }
        }
    }

    /// Applies an externally changed fragment.
    pub fn sync_from_fragment(&mut self, fragment: &str) {
        let catalog = self.catalog;
        self.transition(|nav| nav.sync_from_fragment(fragment, catalog));
    }

    /// Canonical fragment for the current state.
    pub fn fragment(&self) -> String {
        nav::state_to_fragment(&self.nav)
    }

    /// Mirrors the state to `host`, skipping the write when it already
    /// matches.
    pub fn publish<H: FragmentHost + ?Sized>(&self, host: &mut H) -> bool {
        nav::publish(&self.nav, host)
    }

    /// Moves to `Pending` and returns the body to POST, or `None` when the
    /// form is incomplete or a request is already in flight.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<SendTelegramRequest> {
        if !self.can_submit() {
            debug!("Submit ignored (state {:?})", self.submit);
            return None;
        }
        let payload = OrderPayload::compose(&self.nav, &self.draft, now);
        self.submit = SubmitState::Pending {
            session: self.order_session,
        };
        info!("Sending order for {:?}", payload.product);
        Some(SendTelegramRequest {
            text: payload.message_text(),
        })
    }

    /// Applies the outcome of the request started by `begin_submit` and
    /// returns the id of the notice shown for it.
    ///
    /// Success goes home with a fresh draft, but only while the visitor is
    /// still on the form that was sent. A form started in the meantime is
    /// left alone and only the notice is shown. Failure keeps the route and
    /// the draft so the visitor can retry.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        let still_on_sent_form = self.nav.route == Route::Order
            && matches!(self.submit, SubmitState::Pending { session } if session == self.order_session);

        match result {
            Ok(()) => {
                self.submit = SubmitState::Done;
                self.notice = Some(Notice::sent(id));
                if still_on_sent_form {
                    self.navigate(Route::Home);
                    self.fresh_draft();
                } else {
                    debug!("Order delivered after the visitor moved on");
                }
            }
            Err(err) => {
                warn!("Order was not delivered: {}", err);
                self.submit = SubmitState::Failed;
                self.notice = Some(Notice::failed(id));
            }
        }
        id
    }

    /// Closes the notice `id` if it is still the one on screen.
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
            true
        } else {
            false
        }
    }

    pub fn toggle_menu(&mut self, kind: CatalogKind) {
        self.open_menu = if self.open_menu == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    pub fn close_menus(&mut self) {
        self.open_menu = None;
        self.mobile_nav_open = false;
    }

    /// Runs a navigation change and discards the draft when the order view is
    /// entered or left.
    fn transition(&mut self, change: impl FnOnce(&mut NavState)) {
        let before = self.nav.route;
        change(&mut self.nav);
        let after = self.nav.route;
        if before != after && (before == Route::Order || after == Route::Order) {
            self.fresh_draft();
        }
    }

    fn fresh_draft(&mut self) {
        self.draft.reset();
        self.order_session += 1;
    }
}
