use super::{AppInstance, FilterContext, IncidentType, NamedPreset, PermissionSet};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FiltersConfig {
    #[serde(default)]
    pub app_instance: AppInstance,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default)]
    pub presets: Vec<NamedPreset>,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_log_capacity() -> usize {
    200
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            app_instance: AppInstance::default(),
            permissions: PermissionSet::default(),
            presets: Vec::new(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl FiltersConfig {
    pub fn context_for(&self, incident_type: IncidentType) -> FilterContext {
        FilterContext::new(incident_type)
            .with_app_instance(self.app_instance.clone())
            .with_permissions(self.permissions)
            .with_presets(self.presets.clone())
    }
}
