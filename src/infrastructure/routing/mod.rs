pub mod memory_query_params;

pub use memory_query_params::InMemoryQueryParams;
