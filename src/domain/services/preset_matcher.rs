use crate::domain::entities::{FilterOption, PredefinedFilterSet};
use std::collections::BTreeSet;

pub fn allowlist(set: &PredefinedFilterSet, policies: &[FilterOption]) -> BTreeSet<String> {
    set.allowlist(policies.iter().map(FilterOption::preset_key))
}

/// True when the checked policies are exactly the preset's, no more and no fewer.
pub fn is_active(set: &PredefinedFilterSet, policies: &[FilterOption]) -> bool {
    let allow = allowlist(set, policies);
    policies
        .iter()
        .all(|policy| policy.checked == allow.contains(policy.preset_key()))
}

/// Policies as they look once the preset is selected.
pub fn select(set: &PredefinedFilterSet, policies: &[FilterOption]) -> Vec<FilterOption> {
    let allow = allowlist(set, policies);
    policies
        .iter()
        .map(|policy| {
            let checked = allow.contains(policy.preset_key());
            policy.clone().with_checked(checked)
        })
        .collect()
}
