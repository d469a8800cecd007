pub mod catalog;
pub mod config_repository;
pub mod routing;

pub use config_repository::ConfigRepository;
