//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the corresponding repository in `gallery_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod gallery;
