pub mod draft_store;
pub mod filter_coordinator;
pub mod filter_provider;
pub mod log_manager;

pub use draft_store::DraftStore;
pub use filter_coordinator::{FilterCoordinator, LoadStatus, LoadTicket, PresetOutcome};
pub use filter_provider::{FilterProvider, use_incident_filters};
pub use log_manager::LogManager;
