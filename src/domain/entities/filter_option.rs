use super::MatchField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Single(String),
    /// Several query values behind one option (SCL score ranges).
    Bucket(Vec<String>),
}

impl OptionValue {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            OptionValue::Single(value) => Some(value),
            OptionValue::Bucket(_) => None,
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            OptionValue::Single(value) => std::slice::from_ref(value),
            OptionValue::Bucket(values) => values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: OptionValue,
    pub label: String,
    pub checked: bool,
    /// Key used by predefined filter sets when it differs from `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_key: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: OptionValue::Single(value.into()),
            label: label.into(),
            checked: false,
            preset_key: None,
            enabled: true,
        }
    }

    pub fn bucket<I, S>(values: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: OptionValue::Bucket(values.into_iter().map(Into::into).collect()),
            label: label.into(),
            checked: false,
            preset_key: None,
            enabled: true,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_preset_key(mut self, key: impl Into<String>) -> Self {
        self.preset_key = Some(key.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn matches(&self, field: MatchField, key: &str) -> bool {
        match field {
            MatchField::Value => self.value.as_key() == Some(key),
            MatchField::Label => self.label == key,
        }
    }

    pub fn preset_key(&self) -> &str {
        self.preset_key
            .as_deref()
            .or_else(|| self.value.as_key())
            .unwrap_or(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "options", rename_all = "kebab-case")]
pub enum FilterCategory {
    MultiSelect(Vec<FilterOption>),
    SingleToggle(FilterOption),
}

impl FilterCategory {
    pub fn options(&self) -> &[FilterOption] {
        match self {
            FilterCategory::MultiSelect(options) => options,
            FilterCategory::SingleToggle(option) => std::slice::from_ref(option),
        }
    }

    pub fn options_mut(&mut self) -> &mut [FilterOption] {
        match self {
            FilterCategory::MultiSelect(options) => options,
            FilterCategory::SingleToggle(option) => std::slice::from_mut(option),
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        for option in self.options_mut() {
            option.checked = checked;
        }
    }

    /// Vacuously true for an empty list.
    pub fn all_checked(&self) -> bool {
        self.options().iter().all(|option| option.checked)
    }

    pub fn any_checked(&self) -> bool {
        self.options().iter().any(|option| option.checked)
    }

    pub fn checked(&self) -> impl Iterator<Item = &FilterOption> {
        self.options().iter().filter(|option| option.checked)
    }

    /// Same options with every flag cleared.
    pub fn unchecked(&self) -> Self {
        let mut template = self.clone();
        template.set_all(false);
        template
    }
}
