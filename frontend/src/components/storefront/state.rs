//! Root component state.
//!
//! All navigation, order and notice state lives in the shared `Storefront`
//! core. This struct adds what only exists in the browser: the registered
//! `hashchange` listener.

use common::model::catalog::Catalog;
use common::storefront::Storefront;
use wasm_bindgen::closure::Closure;

use super::helpers::BrowserFragment;
use common::nav::FragmentHost;

pub struct StorefrontComponent {
    pub store: Storefront,

    /// Listener attached to `window` on first render, detached on destroy.
    pub hash_listener: Option<Closure<dyn FnMut()>>,
}

impl StorefrontComponent {
    /// Starts from whatever the address bar holds, so deep links render the
    /// right page on the first paint.
    pub fn new() -> Self {
        let mut store = Storefront::new(Catalog::builtin());
        store.sync_from_fragment(&BrowserFragment.current());
        Self {
            store,
            hash_listener: None,
        }
    }
}
