#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use ironplan_domain::{self as domain, CatalogRepository};

pub mod file;
pub mod json_catalog;

#[cfg(test)]
mod tests {
    pub mod data;
}

pub use json_catalog::JsonCatalog;

/// Exercises defined in the domain crate.
#[derive(Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogRepository for BuiltinCatalog {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(domain::build_catalog())
    }
}

/// Catalog selected at start-up.
pub enum Catalog {
    Builtin(BuiltinCatalog),
    Json(JsonCatalog),
}

impl CatalogRepository for Catalog {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        match self {
            Catalog::Builtin(catalog) => catalog.read_exercises().await,
            Catalog::Json(catalog) => catalog.read_exercises().await,
        }
    }
}
