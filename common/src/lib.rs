//! Shared model and client-side logic for the storefront.
//!
//! Everything in this crate is plain Rust with no browser or server
//! dependency, so the routing and order rules can be exercised natively and
//! reused by both the yew frontend and the actix backend.
//!
//! - `model`: catalog tables, routes and the gas consumption calculator.
//! - `nav`: route/selection state and its mapping to the URL fragment.
//! - `order`: order draft, payload formatting and submission outcome.
//! - `storefront`: the root state container and its Elm-style `update`.
//! - `requests`: JSON bodies exchanged with the forwarding endpoint.
//! - `site`: brand and contact constants.

pub mod model;
pub mod nav;
pub mod order;
pub mod requests;
pub mod site;
pub mod storefront;
