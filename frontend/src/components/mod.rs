pub mod calculator;
pub mod card_grid;
pub mod storefront;
