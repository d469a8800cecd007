use super::FilterKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A query parameter value as the routing layer hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// Permissive test: substring of a scalar, member of a list.
    pub fn includes(&self, needle: &str) -> bool {
        match self {
            ParamValue::One(value) => value.contains(needle),
            ParamValue::Many(values) => values.iter().any(|value| value == needle),
        }
    }

    /// Strict test: equal to a scalar, member of a list.
    pub fn has(&self, value: &str) -> bool {
        match self {
            ParamValue::One(current) => current == value,
            ParamValue::Many(values) => values.iter().any(|current| current == value),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::One(value) => std::slice::from_ref(value),
            ParamValue::Many(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::One(value) => value.is_empty(),
            ParamValue::Many(values) => values.is_empty(),
        }
    }
}

/// Filters currently applied to the incident list, as mirrored in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedState {
    params: BTreeMap<FilterKind, ParamValue>,
}

impl AppliedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FilterKind) -> Option<&ParamValue> {
        self.params.get(&kind)
    }

    /// Stores `value`, or drops the key when there is nothing selected.
    pub fn set(&mut self, kind: FilterKind, value: Option<ParamValue>) {
        match value {
            Some(value) if !value.is_empty() => {
                self.params.insert(kind, value);
            }
            _ => {
                self.params.remove(&kind);
            }
        }
    }

    pub fn with(mut self, kind: FilterKind, value: ParamValue) -> Self {
        self.set(kind, Some(value));
        self
    }

    pub fn contains_key(&self, kind: FilterKind) -> bool {
        self.params.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn any_applied(&self) -> bool {
        self.params
            .values()
            .flat_map(ParamValue::values)
            .any(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &ParamValue)> {
        self.params.iter().map(|(kind, value)| (*kind, value))
    }
}
