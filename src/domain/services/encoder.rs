use super::static_catalogs::FLAG_VALUE;
use crate::domain::entities::{
    AppliedState, CategoryShape, FilterCategory, FilterKind, ParamValue, ToggleEncoding,
};

/// Query value for one category, or `None` when nothing in it is selected.
pub fn encode(kind: FilterKind, category: &FilterCategory) -> Option<ParamValue> {
    if let (CategoryShape::SingleToggle, FilterCategory::SingleToggle(option)) =
        (kind.shape(), category)
    {
        if !option.checked {
            return None;
        }
        let value = match kind.toggle_encoding() {
            Some(ToggleEncoding::Literal) => option
                .value
                .as_key()
                .map_or_else(|| option.label.clone(), str::to_string),
            Some(ToggleEncoding::Flag) | None => FLAG_VALUE.to_string(),
        };
        return Some(ParamValue::One(value));
    }

    // Buckets contribute each of their scores, so the list comes out flat.
    let values: Vec<String> = category
        .checked()
        .flat_map(|option| option.value.values().iter().cloned())
        .collect();
    (!values.is_empty()).then_some(ParamValue::Many(values))
}

/// Build a complete applied state from every category given.
pub fn encode_all<'a, I>(categories: I) -> AppliedState
where
    I: IntoIterator<Item = (FilterKind, &'a FilterCategory)>,
{
    let mut state = AppliedState::new();
    for (kind, category) in categories {
        state.set(kind, encode(kind, category));
    }
    state
}
