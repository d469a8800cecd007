use crate::domain::entities::{FilterCategory, FilterKind, FilterOption};

pub const USER_STATUS_VALUE: &str = "inactive";
pub const BOOKMARK_VALUE: &str = "bookmarked";
pub const FLAG_VALUE: &str = "true";

const SCL_SCORE_BUCKETS: [(&str, &[&str]); 5] = [
    ("Trusted (-1)", &["-1"]),
    ("Low (0-1)", &["0", "1"]),
    ("Medium (2-4)", &["2", "3", "4"]),
    ("High (5-6)", &["5", "6"]),
    ("Very High (7-9)", &["7", "8", "9"]),
];

const PRIORITY_TYPES: [(&str, &str); 4] = [
    ("critical", "Critical"),
    ("high", "High"),
    ("medium", "Medium"),
    ("low", "Low"),
];

const ACTION_STATES: [(&str, &str); 4] = [
    ("pending", "Pending"),
    ("in-progress", "In Progress"),
    ("completed", "Completed"),
    ("failed", "Failed"),
];

fn listed(entries: &[(&str, &str)]) -> FilterCategory {
    FilterCategory::MultiSelect(
        entries
            .iter()
            .map(|(value, label)| FilterOption::new(*value, *label))
            .collect(),
    )
}

/// Unchecked option table for filters whose choices never change, or
/// `None` for remotely loaded and incident-dependent filters.
pub fn fixed_template(kind: FilterKind) -> Option<FilterCategory> {
    let toggle = |value: &str, label: &str| {
        Some(FilterCategory::SingleToggle(FilterOption::new(value, label)))
    };

    match kind {
        FilterKind::UserStatus => toggle(USER_STATUS_VALUE, "Inactive Users"),
        FilterKind::RecipientEngagementForward => toggle(FLAG_VALUE, "Forwarded"),
        FilterKind::RecipientEngagementReply => toggle(FLAG_VALUE, "Replied"),
        FilterKind::GlobalAttack => toggle(FLAG_VALUE, "Global Attack"),
        FilterKind::TargetedAttack => toggle(FLAG_VALUE, "Targeted Attack"),
        FilterKind::Bookmark => toggle(BOOKMARK_VALUE, "Bookmarked"),
        FilterKind::SclScore => Some(FilterCategory::MultiSelect(
            SCL_SCORE_BUCKETS
                .iter()
                .map(|(label, values)| FilterOption::bucket(values.iter().copied(), *label))
                .collect(),
        )),
        FilterKind::PriorityType => Some(listed(&PRIORITY_TYPES)),
        FilterKind::ActionState => Some(listed(&ACTION_STATES)),
        FilterKind::PolicyIds
        | FilterKind::ActionTypes
        | FilterKind::DetectionTags
        | FilterKind::DepartmentId
        | FilterKind::ReceivedFolders => None,
    }
}
