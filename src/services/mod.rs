//! Services around the loader: builtin catalog, export, template resolution.

pub mod catalog;
pub mod export;
pub mod template;
