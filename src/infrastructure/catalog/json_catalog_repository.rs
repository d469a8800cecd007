use crate::domain::{
    entities::{AppInstance, CatalogKind, Department, DetectionTag, IncidentType, Policy},
    repositories::FilterCatalogRepository,
};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Catalog contents served by [`JsonCatalogRepository`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub policies: HashMap<IncidentType, Vec<Policy>>,
    #[serde(default)]
    pub detection_tags: Vec<DetectionTag>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub folders: HashMap<AppInstance, Vec<String>>,
    /// Catalogs that answer with an error, for exercising degraded panels.
    #[serde(default)]
    pub unavailable: Vec<CatalogKind>,
    #[serde(default)]
    pub latency_ms: u64,
}

pub struct JsonCatalogRepository {
    fixture: CatalogFixture,
}

impl JsonCatalogRepository {
    pub fn new(fixture: CatalogFixture) -> Self {
        Self { fixture }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog fixture {}", path.display()))?;
        let fixture = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog fixture {}", path.display()))?;
        Ok(Self::new(fixture))
    }

    async fn respond(&self, kind: CatalogKind) -> Result<()> {
        if self.fixture.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.fixture.latency_ms)).await;
        }
        if self.fixture.unavailable.contains(&kind) {
            tracing::warn!("Catalog {:?} is marked unavailable", kind);
            return Err(anyhow!("{:?} catalog unavailable", kind));
        }
        Ok(())
    }
}

#[async_trait]
impl FilterCatalogRepository for JsonCatalogRepository {
    async fn fetch_policies(&self, incident_type: IncidentType) -> Result<Vec<Policy>> {
        self.respond(CatalogKind::Policies).await?;
        Ok(self
            .fixture
            .policies
            .get(&incident_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_detection_tags(&self) -> Result<Vec<DetectionTag>> {
        self.respond(CatalogKind::DetectionTags).await?;
        Ok(self.fixture.detection_tags.clone())
    }

    async fn fetch_departments(&self, _incident_type: IncidentType) -> Result<Vec<Department>> {
        self.respond(CatalogKind::Departments).await?;
        Ok(self.fixture.departments.clone())
    }

    async fn fetch_received_folders(&self, app_instance: &AppInstance) -> Result<Vec<String>> {
        self.respond(CatalogKind::ReceivedFolders).await?;
        Ok(self
            .fixture
            .folders
            .get(app_instance)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "policies": { "threat": [{ "id": "p-1", "name": "Malware", "policy_name": "malware", "is_enabled": true }] },
        "detection_tags": [{ "detection_tag_id": "t-1", "detection_tag_name": "vip" }],
        "departments": [{ "id": 3, "name": "Sales" }],
        "folders": { "default": ["Inbox"] },
        "unavailable": ["departments"]
    }"#;

    fn repository() -> JsonCatalogRepository {
        JsonCatalogRepository::new(serde_json::from_str(FIXTURE).expect("fixture"))
    }

    #[tokio::test]
    async fn serves_policies_per_incident_type() {
        let repository = repository();
        assert_eq!(
            repository.fetch_policies(IncidentType::Threat).await.expect("policies").len(),
            1
        );
        assert!(repository.fetch_policies(IncidentType::Dlp).await.expect("policies").is_empty());
    }

    #[tokio::test]
    async fn unavailable_catalog_errors() {
        let err = repository()
            .fetch_departments(IncidentType::Threat)
            .await
            .expect_err("unavailable");
        assert!(err.to_string().contains("Departments"));
    }

    #[tokio::test]
    async fn folders_are_keyed_by_app_instance() {
        let repository = repository();
        assert_eq!(
            repository.fetch_received_folders(&AppInstance::default()).await.expect("folders"),
            vec!["Inbox".to_string()]
        );
        assert!(repository
            .fetch_received_folders(&AppInstance::new("gmail"))
            .await
            .expect("folders")
            .is_empty());
    }

    #[test]
    fn reads_fixture_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, FIXTURE).expect("write");
        assert!(JsonCatalogRepository::from_file(&path).is_ok());
        assert!(JsonCatalogRepository::from_file(&dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    async fn bundled_demo_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json");
        let repository = JsonCatalogRepository::from_file(&path).expect("fixture");
        let policies = repository
            .fetch_policies(IncidentType::Threat)
            .await
            .expect("policies");
        assert_eq!(policies.len(), 4);
        assert!(repository.fetch_policies(IncidentType::Eac).await.expect("eac").is_empty());
    }
}
