//! Derives the option lists a filter panel starts from.
//!
//! Templates are built once per catalog or session and carry no selection.
//! [`derive`] then marks the options the applied query parameters select.

use super::static_catalogs::{FLAG_VALUE, fixed_template};
use super::validation::OptionValidator;
use crate::domain::entities::{
    AppliedState, Department, DetectionTag, FilterCategory, FilterContext, FilterKind,
    FilterOption, ParamValue, Policy, RemediationAction, ToggleEncoding,
};

pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn policy_options(policies: &[Policy]) -> Vec<FilterOption> {
    let options = policies
        .iter()
        .map(|policy| {
            FilterOption::new(policy.id.as_str(), policy.name.as_str())
                .with_preset_key(policy.policy_name.as_str())
                .with_enabled(policy.is_enabled)
        })
        .collect();
    OptionValidator::dedupe(FilterKind::PolicyIds, options)
}

pub fn detection_tag_options(tags: &[DetectionTag]) -> Vec<FilterOption> {
    let options = tags
        .iter()
        .map(|tag| {
            FilterOption::new(
                tag.detection_tag_id.as_str(),
                capitalize_words(&tag.detection_tag_name),
            )
        })
        .collect();
    OptionValidator::dedupe(FilterKind::DetectionTags, options)
}

pub fn department_options(departments: &[Department]) -> Vec<FilterOption> {
    let options = departments
        .iter()
        .map(|department| FilterOption::new(department.id.to_string(), department.name.as_str()))
        .collect();
    OptionValidator::dedupe(FilterKind::DepartmentId, options)
}

pub fn folder_options(folders: &[String]) -> Vec<FilterOption> {
    let options = folders
        .iter()
        .map(|folder| FilterOption::new(folder.as_str(), folder.as_str()))
        .collect();
    OptionValidator::dedupe(FilterKind::ReceivedFolders, options)
}

pub fn remediation_template(context: &FilterContext) -> FilterCategory {
    FilterCategory::MultiSelect(
        RemediationAction::eligible(context.incident_type, &context.permissions)
            .into_iter()
            .map(|action| FilterOption::new(action.as_str(), action.display_name()))
            .collect(),
    )
}

/// Template for every filter that does not wait on a remote catalog.
pub fn session_template(kind: FilterKind, context: &FilterContext) -> Option<FilterCategory> {
    match kind {
        FilterKind::ActionTypes => Some(remediation_template(context)),
        _ => fixed_template(kind),
    }
}

fn is_selected(kind: FilterKind, option: &FilterOption, param: &ParamValue) -> bool {
    match kind.toggle_encoding() {
        // Flags accept any value that mentions "true", including list encodings.
        Some(ToggleEncoding::Flag) => param.includes(FLAG_VALUE),
        Some(ToggleEncoding::Literal) => option.value.as_key().is_some_and(|key| param.has(key)),
        None => option.value.values().iter().all(|value| param.has(value)),
    }
}

pub fn derive(kind: FilterKind, template: &FilterCategory, applied: &AppliedState) -> FilterCategory {
    let param = applied.get(kind);
    let mut category = template.clone();
    for option in category.options_mut() {
        option.checked = param.is_some_and(|param| is_selected(kind, option, param));
    }
    category
}
