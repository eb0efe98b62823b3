//! Update function for the storefront component.
//!
//! Visitor actions are forwarded to `common::storefront::update`. After every
//! change the canonical fragment is published to the address bar (a no-op
//! when it already matches). Submission runs the request on the local
//! executor and reports back with `Msg::SubmitFinished`. Each notice gets
//! its own dismiss timer, which only closes that notice.

use common::nav::FragmentHost;
use common::order::NOTICE_DISMISS_MS;
use common::storefront::{self, StoreMsg};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::helpers::{now, scroll_to_top, send_order, BrowserFragment};
use super::messages::Msg;
use super::state::StorefrontComponent;

pub fn update(
    component: &mut StorefrontComponent,
    ctx: &Context<StorefrontComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Store(store_msg) => {
            let route_before = component.store.nav.route;
            let changed = storefront::update(&mut component.store, store_msg);
            component.store.publish(&mut BrowserFragment);
            if component.store.nav.route != route_before {
                scroll_to_top();
            }
            changed
        }
        Msg::HashChanged => {
            let fragment = BrowserFragment.current();
            let changed =
                storefront::update(&mut component.store, StoreMsg::SyncFromFragment(fragment));
            // Rewrites unknown routes and broken ids to their canonical form.
            component.store.publish(&mut BrowserFragment);
            changed
        }
        Msg::Submit => {
            let Some(request) = component.store.begin_submit(now()) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = send_order(&request).await;
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Order was not delivered: {}", err));
            }
            let notice_id = component.store.finish_submit(result);
            component.store.publish(&mut BrowserFragment);
            scroll_to_top();

            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                link.send_message(Msg::Store(StoreMsg::DismissNotice(notice_id)));
            });
            true
        }
    }
}
