pub mod applied_state;
pub mod catalog;
pub mod config;
pub mod filter_kind;
pub mod filter_option;
pub mod incident;
pub mod predefined;
pub mod remediation;

pub use applied_state::{AppliedState, ParamValue};
pub use catalog::{
    CatalogKind, CatalogLoad, Department, DepartmentsResponse, DetectionTag,
    DetectionTagsResponse, FoldersResponse, PoliciesResponse, Policy,
};
pub use config::FiltersConfig;
pub use filter_kind::{CategoryShape, FilterKind, MatchField, ToggleEncoding};
pub use filter_option::{FilterCategory, FilterOption, OptionValue};
pub use incident::{AppInstance, FilterContext, IncidentType, NavigationContext, PermissionSet};
pub use predefined::{NamedPreset, PredefinedFilterSet};
pub use remediation::RemediationAction;
