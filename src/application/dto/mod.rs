use crate::domain::entities::{
    AppliedState, CatalogKind, CatalogLoad, FilterCategory, FilterKind, FilterOption, IncidentType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResult {
    pub kind: CatalogKind,
    pub outcome: Result<Vec<FilterOption>, String>,
}

impl CatalogResult {
    pub fn new(kind: CatalogKind, result: anyhow::Result<Vec<FilterOption>>) -> Self {
        Self {
            kind,
            outcome: result.map_err(|e| format!("{e:#}")),
        }
    }

    pub fn into_load(self) -> CatalogLoad<Vec<FilterOption>> {
        match self.outcome {
            Ok(options) => CatalogLoad::Ready(options),
            Err(message) => CatalogLoad::Failed(message),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogBatch {
    pub results: Vec<CatalogResult>,
}

impl CatalogBatch {
    pub fn outcome(&self, kind: CatalogKind) -> Option<&Result<Vec<FilterOption>, String>> {
        self.results
            .iter()
            .find(|result| result.kind == kind)
            .map(|result| &result.outcome)
    }
}

/// What a rendering collaborator needs to draw one filter group.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySnapshot {
    pub kind: FilterKind,
    pub category: FilterCategory,
    pub all_checked: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterSnapshot {
    pub incident_type: IncidentType,
    pub categories: Vec<CategorySnapshot>,
    pub all_users_checked: bool,
    pub any_filters_applied: bool,
    pub applied: AppliedState,
    pub taken_at: DateTime<Utc>,
}

impl FilterSnapshot {
    pub fn category(&self, kind: FilterKind) -> Option<&CategorySnapshot> {
        self.categories.iter().find(|snapshot| snapshot.kind == kind)
    }
}
