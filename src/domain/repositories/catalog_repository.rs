use crate::domain::entities::{AppInstance, Department, DetectionTag, IncidentType, Policy};
use anyhow::Result;
use async_trait::async_trait;

/// Source of the option catalogs for the dynamically populated filters.
#[async_trait]
pub trait FilterCatalogRepository: Send + Sync {
    async fn fetch_policies(&self, incident_type: IncidentType) -> Result<Vec<Policy>>;
    async fn fetch_detection_tags(&self) -> Result<Vec<DetectionTag>>;
    async fn fetch_departments(&self, incident_type: IncidentType) -> Result<Vec<Department>>;
    async fn fetch_received_folders(&self, app_instance: &AppInstance) -> Result<Vec<String>>;
}
