pub mod catalog_repository;
pub mod query_param_store;

pub use catalog_repository::FilterCatalogRepository;
pub use query_param_store::QueryParamStore;
