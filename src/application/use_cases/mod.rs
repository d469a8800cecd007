pub mod catalog_operations;

pub use catalog_operations::*;
