//! API data transfer objects shared by controllers and the OpenAPI document.

pub mod api;
pub mod auction;
pub mod bid;
pub mod user;
