use crate::domain::entities::{AppliedState, FilterCategory, FilterKind};
use crate::domain::services::encoder;
use serde::Serialize;
use std::collections::BTreeMap;

/// Working copy of every filter category, edited before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftStore {
    categories: BTreeMap<FilterKind, FilterCategory>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FilterKind) -> Option<&FilterCategory> {
        self.categories.get(&kind)
    }

    pub fn replace(&mut self, kind: FilterKind, category: FilterCategory) {
        self.categories.insert(kind, category);
    }

    /// Flip the option identified by `key`. Single toggles flip whatever the key.
    /// Returns `false` when nothing matched.
    pub fn toggle_one(&mut self, kind: FilterKind, key: &str) -> bool {
        let Some(category) = self.categories.get_mut(&kind) else {
            return false;
        };

        let field = kind.match_field();
        let target = match category {
            FilterCategory::SingleToggle(option) => Some(option),
            FilterCategory::MultiSelect(options) => {
                options.iter_mut().find(|option| option.matches(field, key))
            }
        };

        match target {
            Some(option) => {
                option.checked = !option.checked;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, kind: FilterKind, checked: bool) {
        if let Some(category) = self.categories.get_mut(&kind) {
            category.set_all(checked);
        }
    }

    pub fn set_everything(&mut self, checked: bool) {
        for category in self.categories.values_mut() {
            category.set_all(checked);
        }
    }

    /// Mirror a multi-select control: exactly the selected options end up checked.
    pub fn apply_dropdown_selection<S: AsRef<str>>(&mut self, kind: FilterKind, selected: &[S]) {
        if selected.is_empty() {
            self.set_all(kind, false);
            return;
        }

        let field = kind.match_field();
        if let Some(category) = self.categories.get_mut(&kind) {
            for option in category.options_mut() {
                option.checked = selected
                    .iter()
                    .any(|key| option.matches(field, key.as_ref()));
            }
        }
    }

    /// `true` for a category with no options, and for one that does not exist yet.
    pub fn all_checked(&self, kind: FilterKind) -> bool {
        self.get(kind).is_none_or(FilterCategory::all_checked)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &FilterCategory)> {
        self.categories.iter().map(|(kind, category)| (*kind, category))
    }

    pub fn to_applied_state(&self) -> AppliedState {
        encoder::encode_all(self.iter())
    }
}
