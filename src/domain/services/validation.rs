use crate::domain::entities::{FilterKind, FilterOption, MatchField};
use std::collections::HashSet;

pub struct OptionValidator;

impl OptionValidator {
    fn identity(kind: FilterKind, option: &FilterOption) -> String {
        match option.value.as_key() {
            Some(key) if kind.match_field() == MatchField::Value => {
                key.to_string()
            }
            _ => option.label.clone(),
        }
    }

    pub fn validate_unique(kind: FilterKind, options: &[FilterOption]) -> Result<(), String> {
        let mut seen = HashSet::new();
        for option in options {
            let identity = Self::identity(kind, option);
            if !seen.insert(identity.clone()) {
                return Err(format!("Duplicate {} option: {}", kind, identity));
            }
        }
        Ok(())
    }

    /// Keep the first option for every key so toggles address exactly one entry.
    pub fn dedupe(kind: FilterKind, options: Vec<FilterOption>) -> Vec<FilterOption> {
        if let Err(e) = Self::validate_unique(kind, &options) {
            tracing::warn!("{}; keeping the first occurrence", e);
        } else {
            return options;
        }

        let mut seen = HashSet::new();
        options
            .into_iter()
            .filter(|option| seen.insert(Self::identity(kind, option)))
            .collect()
    }
}
