//! SeaORM entity definitions for the auction house schema.

pub mod prelude;

pub mod auction;
pub mod bid;
pub mod user;
