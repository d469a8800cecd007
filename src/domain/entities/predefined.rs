use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A policy preset: either exactly these policies, or every policy but these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedFilterSet {
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl PredefinedFilterSet {
    /// An inclusion list wins when both are given.
    pub fn from_lists(
        included: Option<Vec<String>>,
        excluded: Option<Vec<String>>,
    ) -> Result<Self, FilterError> {
        match (included, excluded) {
            (Some(included), _) => Ok(Self::Include(included)),
            (None, Some(excluded)) => Ok(Self::Exclude(excluded)),
            (None, None) => Err(FilterError::EmptyPreset),
        }
    }

    /// Resolve to the set of policy keys that should end up checked.
    pub fn allowlist<'a, I>(&self, policy_keys: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::Include(included) => included.iter().cloned().collect(),
            Self::Exclude(excluded) => policy_keys
                .into_iter()
                .filter(|key| !excluded.iter().any(|excluded| excluded == key))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPreset {
    pub name: String,
    pub rule: PredefinedFilterSet,
}

impl NamedPreset {
    pub fn new(name: impl Into<String>, rule: PredefinedFilterSet) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}
