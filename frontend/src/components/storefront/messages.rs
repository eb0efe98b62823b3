use common::order::SubmitError;
use common::storefront::StoreMsg;

pub enum Msg {
    /// A visitor action handled by the shared state core.
    Store(StoreMsg),
    /// The browser reported a `hashchange` (back/forward, edited URL, or the
    /// echo of our own write).
    HashChanged,
    Submit,
    SubmitFinished(Result<(), SubmitError>),
}
