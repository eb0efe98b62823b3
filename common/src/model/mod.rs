pub mod catalog;
pub mod consumption;
pub mod route;
