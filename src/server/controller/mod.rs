//! HTTP request handlers.
//!
//! Controllers validate path and body input, convert DTOs into domain parameters, call
//! the matching service and convert the result back into a DTO.

pub mod auction;
pub mod bid;
pub mod user;
