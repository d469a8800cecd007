pub mod async_executor;
pub mod catalog_loader;
pub mod event_bus;
pub mod log_capture;

pub use async_executor::AsyncExecutor;
pub use catalog_loader::CatalogLoader;
pub use event_bus::{EventBus, FilterEvent};
