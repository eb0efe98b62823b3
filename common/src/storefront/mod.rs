//! Root state container of the site.
//!
//! Structure follows the component split used by the frontend: `state`
//! holds the data and the operations, `messages` lists what the UI can ask
//! for, and `update` applies a message and reports whether anything visible
//! changed. The frontend component owns one `Storefront`, forwards every
//! `StoreMsg` to `update` and publishes the resulting fragment.

mod messages;
mod state;
mod update;

pub use messages::StoreMsg;
pub use state::Storefront;
pub use update::update;
