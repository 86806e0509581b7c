//! Authorization extractors.
//!
//! - [`auth::RequireSecret`] -- Requires the shared write secret as a Bearer token.

pub mod auth;
