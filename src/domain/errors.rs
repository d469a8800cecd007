use crate::domain::entities::FilterKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("use_incident_filters must be called within a FilterProvider scope")]
    OutsideProvider,

    #[error("filter state is already borrowed by an enclosing use_incident_filters call")]
    ReentrantAccess,

    #[error("unknown predefined filter set: {0}")]
    UnknownPreset(String),

    #[error("predefined filter set needs an inclusion or an exclusion list")]
    EmptyPreset,

    #[error("unknown filter parameter key: {0}")]
    UnknownParamKey(String),

    #[error("unknown incident type: {0}")]
    UnknownIncidentType(String),

    #[error("{0} is not a dynamically loaded filter")]
    NotDynamic(FilterKind),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
