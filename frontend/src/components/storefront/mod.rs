//! Storefront root component: wires the Yew `Component` implementation to
//! the submodules for state, update logic, view rendering and browser glue.
//!
//! Responsibilities
//! - Delegate `update` and `view` to `update::update` and `view::view`.
//! - On first render, publish the canonical fragment and start listening to
//!   `hashchange`; detach the listener when the component is destroyed.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod helpers;
mod messages;
mod pages;
mod state;
mod update;
mod view;

use helpers::BrowserFragment;
pub use messages::Msg;
pub use state::StorefrontComponent;

impl Component for StorefrontComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StorefrontComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.hash_listener.is_some() {
            return;
        }
        self.store.publish(&mut BrowserFragment);

        let link = ctx.link().clone();
        let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::HashChanged));
        if let Some(window) = web_sys::window() {
            if window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .is_err()
            {
                gloo_console::error!("Could not listen to hashchange");
            }
        }
        self.hash_listener = Some(listener);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.hash_listener.take()) {
            let _ = window
                .remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
        }
    }
}
