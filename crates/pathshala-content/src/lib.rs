//! Curriculum content for Pathshala
//!
//! This crate holds the typed curriculum model (topics → units → lessons →
//! problem sets → problems), the compiled-in content registry, and the
//! read-only [`ContentLoader`] used to look entities up by identifier.

pub mod error;
pub mod integrity;
pub mod loader;
pub mod models;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ContentError;
pub use loader::{ContentLoader, UnitRef};
pub use registry::Registry;
