//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! auction rules that span more than one table (bid acceptance, winner selection) and
//! work with domain models rather than DTOs or entity models.

pub mod auction;
pub mod bid;
pub mod user;
