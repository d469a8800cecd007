use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every filter the incident list understands, keyed by its query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    PolicyIds,
    ActionTypes,
    UserStatus,
    RecipientEngagementForward,
    RecipientEngagementReply,
    GlobalAttack,
    TargetedAttack,
    DetectionTags,
    Bookmark,
    DepartmentId,
    SclScore,
    PriorityType,
    ReceivedFolders,
    ActionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryShape {
    MultiSelect,
    SingleToggle,
}

/// Which option field a toggle or dropdown selection is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Value,
    Label,
}

/// How a checked single toggle is written to the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEncoding {
    /// Written as the literal `"true"`.
    Flag,
    /// Written as the option's own value.
    Literal,
}

impl FilterKind {
    pub const ALL: [FilterKind; 14] = [
        FilterKind::PolicyIds,
        FilterKind::ActionTypes,
        FilterKind::UserStatus,
        FilterKind::RecipientEngagementForward,
        FilterKind::RecipientEngagementReply,
        FilterKind::GlobalAttack,
        FilterKind::TargetedAttack,
        FilterKind::DetectionTags,
        FilterKind::Bookmark,
        FilterKind::DepartmentId,
        FilterKind::SclScore,
        FilterKind::PriorityType,
        FilterKind::ReceivedFolders,
        FilterKind::ActionState,
    ];

    /// Filters that move together under the "all users" toggle.
    pub const USER_GROUP: [FilterKind; 3] = [
        FilterKind::UserStatus,
        FilterKind::RecipientEngagementReply,
        FilterKind::RecipientEngagementForward,
    ];

    pub fn param_key(self) -> &'static str {
        match self {
            FilterKind::PolicyIds => "policy-ids",
            FilterKind::ActionTypes => "action-types",
            FilterKind::UserStatus => "user-status",
            FilterKind::RecipientEngagementForward => "recipient-engagement-forward",
            FilterKind::RecipientEngagementReply => "recipient-engagement-reply",
            FilterKind::GlobalAttack => "global-attack",
            FilterKind::TargetedAttack => "targeted-attack",
            FilterKind::DetectionTags => "detection-tags",
            FilterKind::Bookmark => "bookmark",
            FilterKind::DepartmentId => "department-id",
            FilterKind::SclScore => "scl-score",
            FilterKind::PriorityType => "priority-type",
            FilterKind::ReceivedFolders => "received-folders",
            FilterKind::ActionState => "action-state",
        }
    }

    pub fn shape(self) -> CategoryShape {
        match self {
            FilterKind::UserStatus
            | FilterKind::RecipientEngagementForward
            | FilterKind::RecipientEngagementReply
            | FilterKind::GlobalAttack
            | FilterKind::TargetedAttack
            | FilterKind::Bookmark => CategoryShape::SingleToggle,
            _ => CategoryShape::MultiSelect,
        }
    }

    pub fn toggle_encoding(self) -> Option<ToggleEncoding> {
        match self {
            FilterKind::RecipientEngagementForward
            | FilterKind::RecipientEngagementReply
            | FilterKind::GlobalAttack
            | FilterKind::TargetedAttack => Some(ToggleEncoding::Flag),
            FilterKind::UserStatus | FilterKind::Bookmark => Some(ToggleEncoding::Literal),
            _ => None,
        }
    }

    /// SCL buckets carry several scores per option, so they are matched by label.
    pub fn match_field(self) -> MatchField {
        match self {
            FilterKind::SclScore => MatchField::Label,
            _ => MatchField::Value,
        }
    }

    /// Whether the options come from a remote catalog rather than a fixed table.
    pub fn is_dynamic(self) -> bool {
        matches!(
            self,
            FilterKind::PolicyIds
                | FilterKind::DetectionTags
                | FilterKind::DepartmentId
                | FilterKind::ReceivedFolders
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_key())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.param_key() == s)
            .ok_or_else(|| FilterError::UnknownParamKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_keys_round_trip_through_from_str() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.param_key().parse::<FilterKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn serde_names_match_param_keys() {
        for kind in FilterKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.param_key()));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            "severity".parse::<FilterKind>(),
            Err(FilterError::UnknownParamKey(key)) if key == "severity"
        ));
    }

    #[test]
    fn only_scl_matches_on_label() {
        let by_label: Vec<_> = FilterKind::ALL
            .into_iter()
            .filter(|kind| kind.match_field() == MatchField::Label)
            .collect();
        assert_eq!(by_label, vec![FilterKind::SclScore]);
    }

    #[test]
    fn every_toggle_has_an_encoding() {
        for kind in FilterKind::ALL {
            assert_eq!(
                kind.shape() == CategoryShape::SingleToggle,
                kind.toggle_encoding().is_some(),
                "{kind}"
            );
        }
    }
}
