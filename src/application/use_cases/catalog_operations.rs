use crate::application::dto::{CatalogBatch, CatalogResult};
use crate::domain::{
    entities::{AppInstance, CatalogKind, FilterContext, FilterOption, IncidentType},
    repositories::FilterCatalogRepository,
    services::initializer,
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct LoadPolicyOptions {
    repository: Arc<dyn FilterCatalogRepository>,
}

impl LoadPolicyOptions {
    pub fn new(repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, incident_type: IncidentType) -> Result<Vec<FilterOption>> {
        let policies = self
            .repository
            .fetch_policies(incident_type)
            .await
            .with_context(|| format!("Failed to load {} policies", incident_type))?;
        tracing::debug!("Fetched {} policies for {}", policies.len(), incident_type);
        Ok(initializer::policy_options(&policies))
    }
}

pub struct LoadDetectionTagOptions {
    repository: Arc<dyn FilterCatalogRepository>,
}

impl LoadDetectionTagOptions {
    pub fn new(repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<FilterOption>> {
        let tags = self
            .repository
            .fetch_detection_tags()
            .await
            .context("Failed to load detection tags")?;
        tracing::debug!("Fetched {} detection tags", tags.len());
        Ok(initializer::detection_tag_options(&tags))
    }
}

pub struct LoadDepartmentOptions {
    repository: Arc<dyn FilterCatalogRepository>,
}

impl LoadDepartmentOptions {
    pub fn new(repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, incident_type: IncidentType) -> Result<Vec<FilterOption>> {
        let departments = self
            .repository
            .fetch_departments(incident_type)
            .await
            .with_context(|| format!("Failed to load {} departments", incident_type))?;
        tracing::debug!("Fetched {} departments for {}", departments.len(), incident_type);
        Ok(initializer::department_options(&departments))
    }
}

pub struct LoadReceivedFolderOptions {
    repository: Arc<dyn FilterCatalogRepository>,
}

impl LoadReceivedFolderOptions {
    pub fn new(repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, app_instance: &AppInstance) -> Result<Vec<FilterOption>> {
        let folders = self
            .repository
            .fetch_received_folders(app_instance)
            .await
            .with_context(|| format!("Failed to load received folders for {}", app_instance))?;
        tracing::debug!("Fetched {} received folders", folders.len());
        Ok(initializer::folder_options(&folders))
    }
}

/// Fetches every dynamic catalog at once; one failure does not hold back the others.
pub struct LoadFilterCatalogs {
    policies: LoadPolicyOptions,
    detection_tags: LoadDetectionTagOptions,
    departments: LoadDepartmentOptions,
    received_folders: LoadReceivedFolderOptions,
}

impl LoadFilterCatalogs {
    pub fn new(repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self {
            policies: LoadPolicyOptions::new(Arc::clone(&repository)),
            detection_tags: LoadDetectionTagOptions::new(Arc::clone(&repository)),
            departments: LoadDepartmentOptions::new(Arc::clone(&repository)),
            received_folders: LoadReceivedFolderOptions::new(repository),
        }
    }

    pub async fn execute_one(
        &self,
        kind: CatalogKind,
        context: &FilterContext,
    ) -> Result<Vec<FilterOption>> {
        match kind {
            CatalogKind::Policies => self.policies.execute(context.incident_type).await,
            CatalogKind::DetectionTags => self.detection_tags.execute().await,
            CatalogKind::Departments => self.departments.execute(context.incident_type).await,
            CatalogKind::ReceivedFolders => {
                self.received_folders.execute(&context.app_instance).await
            }
        }
    }

    pub async fn execute(&self, context: &FilterContext) -> CatalogBatch {
        let (policies, detection_tags, departments, received_folders) = tokio::join!(
            self.policies.execute(context.incident_type),
            self.detection_tags.execute(),
            self.departments.execute(context.incident_type),
            self.received_folders.execute(&context.app_instance),
        );

        CatalogBatch {
            results: vec![
                CatalogResult::new(CatalogKind::Policies, policies),
                CatalogResult::new(CatalogKind::DetectionTags, detection_tags),
                CatalogResult::new(CatalogKind::Departments, departments),
                CatalogResult::new(CatalogKind::ReceivedFolders, received_folders),
            ],
        }
    }
}
