use super::NamedPreset;
use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
    Threat,
    Abuse,
    Dlp,
    Eac,
}

impl IncidentType {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentType::Threat => "threat",
            IncidentType::Abuse => "abuse",
            IncidentType::Dlp => "dlp",
            IncidentType::Eac => "eac",
        }
    }

    pub fn is_dlp_or_eac(self) -> bool {
        matches!(self, IncidentType::Dlp | IncidentType::Eac)
    }

    pub fn is_abuse_or_eac(self) -> bool {
        matches!(self, IncidentType::Abuse | IncidentType::Eac)
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "threat" => Ok(IncidentType::Threat),
            "abuse" => Ok(IncidentType::Abuse),
            "dlp" => Ok(IncidentType::Dlp),
            "eac" => Ok(IncidentType::Eac),
            _ => Err(FilterError::UnknownIncidentType(s.to_string())),
        }
    }
}

/// Tenant flavour the dashboard runs against; folder catalogs depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppInstance(String);

impl AppInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AppInstance {
    fn default() -> Self {
        Self::new("default")
    }
}

impl fmt::Display for AppInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant feature flags that gate remediation actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionSet {
    pub warning_banner_enabled: bool,
    pub permanently_delete_enabled: bool,
    pub outbound_gateway_enabled: bool,
    pub dlp_encryption_enabled: bool,
    pub lock_account_allowed: bool,
    pub pac_timeline_enabled: bool,
}

/// Everything the coordinator needs to know about the session it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext {
    pub incident_type: IncidentType,
    pub app_instance: AppInstance,
    pub permissions: PermissionSet,
    pub presets: Vec<NamedPreset>,
}

impl FilterContext {
    pub fn new(incident_type: IncidentType) -> Self {
        Self {
            incident_type,
            app_instance: AppInstance::default(),
            permissions: PermissionSet::default(),
            presets: Vec::new(),
        }
    }

    pub fn with_app_instance(mut self, app_instance: AppInstance) -> Self {
        self.app_instance = app_instance;
        self
    }

    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_presets(mut self, presets: Vec<NamedPreset>) -> Self {
        self.presets = presets;
        self
    }
}

/// Location state reported by the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    pub search: Option<String>,
}

impl NavigationContext {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_search(&self) -> bool {
        self.search
            .as_deref()
            .is_some_and(|search| !search.trim_start_matches('?').is_empty())
    }
}
