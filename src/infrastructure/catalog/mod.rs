pub mod json_catalog_repository;

pub use json_catalog_repository::{CatalogFixture, JsonCatalogRepository};
