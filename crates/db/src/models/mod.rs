//! Row types and request DTOs, one module per table.

pub mod category;
pub mod gallery_image;
