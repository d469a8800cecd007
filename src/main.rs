use anyhow::{Context, Result, bail};
use incident_filters::application::UseCaseContainer;
use incident_filters::domain::entities::IncidentType;
use incident_filters::domain::repositories::FilterCatalogRepository;
use incident_filters::infrastructure::ConfigRepository;
use incident_filters::infrastructure::catalog::JsonCatalogRepository;
use incident_filters::infrastructure::routing::InMemoryQueryParams;
use incident_filters::presentation::components::{
    FilterCoordinator, FilterProvider, LogManager, use_incident_filters,
};
use incident_filters::presentation::services::log_capture::init_log_capture;
use incident_filters::presentation::services::{AsyncExecutor, CatalogLoader, EventBus};
use std::path::PathBuf;
use std::sync::Arc;

const USAGE: &str = "usage: incident-filters <catalog.json> [threat|abuse|dlp|eac] [preset name]";

fn main() -> Result<()> {
    let log_rx = init_log_capture()?;

    let mut args = std::env::args().skip(1);
    let Some(catalog_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let incident_type: IncidentType = match args.next() {
        Some(raw) => raw.parse()?,
        None => IncidentType::Threat,
    };
    let preset = args.next();

    let config = ConfigRepository::new().load()?;
    let mut logs = LogManager::with_capacity(config.log_capacity);

    let repository: Arc<dyn FilterCatalogRepository> = Arc::new(
        JsonCatalogRepository::from_file(&catalog_path)
            .with_context(|| format!("Cannot open catalog {}", catalog_path.display()))?,
    );
    let use_cases = Arc::new(UseCaseContainer::new(repository));
    let loader = CatalogLoader::new(use_cases, AsyncExecutor::new()?);

    let events = EventBus::new();
    events.subscribe(|event| tracing::info!("Filter event: {:?}", event));

    let coordinator = FilterCoordinator::new(
        config.context_for(incident_type),
        Box::new(InMemoryQueryParams::new()),
        events,
    );
    let provider = FilterProvider::new(coordinator);

    let snapshot = provider.scope(|| -> Result<_> {
        use_incident_filters(|filters| loader.load_all(filters))?;
        if let Some(name) = &preset {
            use_incident_filters(|filters| filters.toggle_named_preset(name))??;
        }
        Ok(use_incident_filters(|filters| filters.snapshot())?)
    })?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    logs.drain(&log_rx);
    for line in logs.all_logs() {
        eprintln!("{line}");
    }
    Ok(())
}
