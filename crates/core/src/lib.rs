//! Domain building blocks for the gallery service.
//!
//! Everything here is free of HTTP and database concerns so it can be unit
//! tested in isolation and shared by the `db` and `api` crates.

pub mod auth;
pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
pub mod validation;
