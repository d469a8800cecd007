use super::FilterKind;
use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};

/// The four filters whose options are fetched remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Policies,
    DetectionTags,
    Departments,
    ReceivedFolders,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Policies,
        CatalogKind::DetectionTags,
        CatalogKind::Departments,
        CatalogKind::ReceivedFolders,
    ];

    pub fn filter_kind(self) -> FilterKind {
        match self {
            CatalogKind::Policies => FilterKind::PolicyIds,
            CatalogKind::DetectionTags => FilterKind::DetectionTags,
            CatalogKind::Departments => FilterKind::DepartmentId,
            CatalogKind::ReceivedFolders => FilterKind::ReceivedFolders,
        }
    }
}

impl TryFrom<FilterKind> for CatalogKind {
    type Error = FilterError;

    fn try_from(kind: FilterKind) -> Result<Self, Self::Error> {
        CatalogKind::ALL
            .into_iter()
            .find(|catalog| catalog.filter_kind() == kind)
            .ok_or(FilterError::NotDynamic(kind))
    }
}

/// Result of a catalog fetch as seen by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoad<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> CatalogLoad<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogLoad::Loading)
    }
}

impl<T> From<anyhow::Result<T>> for CatalogLoad<T> {
    fn from(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(items) => CatalogLoad::Ready(items),
            Err(e) => CatalogLoad::Failed(format!("{e:#}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub policy_name: String,
    #[serde(default)]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionTag {
    #[serde(default)]
    pub detection_tag_id: String,
    #[serde(default)]
    pub detection_tag_name: String,
}

/// Departments come back with numeric ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoliciesResponse {
    #[serde(default)]
    pub policies: Vec<Policy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionTagsResponse {
    #[serde(default)]
    pub detection_tags: Vec<DetectionTag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Folders have no id; each entry is its own key and label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<String>,
}
