use super::{IncidentType, PermissionSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemediationAction {
    WillAutoRemediate,
    Alert,
    Delete,
    Quarantine,
    MarkSafe,
    LockUser,
    Label,
    Ignore,
    Banner,
    PermanentlyDelete,
    Block,
    InlineEncrypt,
}

impl RemediationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RemediationAction::WillAutoRemediate => "will-auto-remediate",
            RemediationAction::Alert => "alert",
            RemediationAction::Delete => "delete",
            RemediationAction::Quarantine => "quarantine",
            RemediationAction::MarkSafe => "mark-safe",
            RemediationAction::LockUser => "lock-user",
            RemediationAction::Label => "label",
            RemediationAction::Ignore => "ignore",
            RemediationAction::Banner => "banner",
            RemediationAction::PermanentlyDelete => "permanently-delete",
            RemediationAction::Block => "block",
            RemediationAction::InlineEncrypt => "inline-encrypt",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RemediationAction::WillAutoRemediate => "Will Auto-Remediate",
            RemediationAction::Alert => "Alert",
            RemediationAction::Delete => "Delete",
            RemediationAction::Quarantine => "Quarantine",
            RemediationAction::MarkSafe => "Mark as Safe",
            RemediationAction::LockUser => "Lock User",
            RemediationAction::Label => "Label",
            RemediationAction::Ignore => "Ignore",
            RemediationAction::Banner => "Warning Banner",
            RemediationAction::PermanentlyDelete => "Permanently Delete",
            RemediationAction::Block => "Block",
            RemediationAction::InlineEncrypt => "Encrypt",
        }
    }

    /// Actions offered for `incident_type`, in the order the filter panel renders them.
    pub fn eligible(incident_type: IncidentType, permissions: &PermissionSet) -> Vec<Self> {
        let mut actions = match incident_type {
            IncidentType::Threat => vec![Self::WillAutoRemediate, Self::Delete],
            IncidentType::Eac => vec![Self::Alert],
            IncidentType::Abuse | IncidentType::Dlp => vec![Self::Alert, Self::Delete],
        };

        let mailbox_actions = !incident_type.is_dlp_or_eac();

        if mailbox_actions {
            actions.push(Self::Quarantine);
        }
        actions.push(Self::MarkSafe);
        if incident_type == IncidentType::Eac
            && permissions.pac_timeline_enabled
            && permissions.lock_account_allowed
        {
            actions.push(Self::LockUser);
        }
        if mailbox_actions {
            actions.push(Self::Label);
        }
        actions.push(Self::Ignore);
        if incident_type == IncidentType::Threat && permissions.warning_banner_enabled {
            actions.push(Self::Banner);
        }
        if !incident_type.is_abuse_or_eac() && permissions.permanently_delete_enabled {
            actions.push(Self::PermanentlyDelete);
        }
        if incident_type == IncidentType::Dlp && permissions.outbound_gateway_enabled {
            actions.push(Self::Block);
        }
        if incident_type == IncidentType::Dlp && permissions.dlp_encryption_enabled {
            actions.push(Self::InlineEncrypt);
        }

        actions
    }
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RemediationAction::*;
    use super::*;

    fn all_permissions() -> PermissionSet {
        PermissionSet {
            warning_banner_enabled: true,
            permanently_delete_enabled: true,
            outbound_gateway_enabled: true,
            dlp_encryption_enabled: true,
            lock_account_allowed: true,
            pac_timeline_enabled: true,
        }
    }

    #[test]
    fn threat_with_warning_banner() {
        let permissions = PermissionSet {
            warning_banner_enabled: true,
            ..PermissionSet::default()
        };
        assert_eq!(
            RemediationAction::eligible(IncidentType::Threat, &permissions),
            vec![WillAutoRemediate, Delete, Quarantine, MarkSafe, Label, Ignore, Banner]
        );
    }

    #[test]
    fn threat_with_everything_enabled() {
        assert_eq!(
            RemediationAction::eligible(IncidentType::Threat, &all_permissions()),
            vec![
                WillAutoRemediate,
                Delete,
                Quarantine,
                MarkSafe,
                Label,
                Ignore,
                Banner,
                PermanentlyDelete
            ]
        );
    }

    #[test]
    fn eac_locks_users_only_with_both_flags() {
        let mut permissions = PermissionSet {
            lock_account_allowed: true,
            ..PermissionSet::default()
        };
        assert_eq!(
            RemediationAction::eligible(IncidentType::Eac, &permissions),
            vec![Alert, MarkSafe, Ignore]
        );
        permissions.pac_timeline_enabled = true;
        assert_eq!(
            RemediationAction::eligible(IncidentType::Eac, &permissions),
            vec![Alert, MarkSafe, LockUser, Ignore]
        );
    }

    #[test]
    fn dlp_gets_gateway_actions() {
        assert_eq!(
            RemediationAction::eligible(IncidentType::Dlp, &all_permissions()),
            vec![Alert, Delete, MarkSafe, Ignore, PermanentlyDelete, Block, InlineEncrypt]
        );
    }

    #[test]
    fn abuse_never_permanently_deletes() {
        assert_eq!(
            RemediationAction::eligible(IncidentType::Abuse, &all_permissions()),
            vec![Alert, Delete, Quarantine, MarkSafe, Label, Ignore]
        );
    }

    #[test]
    fn serde_uses_query_values() {
        for action in [WillAutoRemediate, PermanentlyDelete, InlineEncrypt, MarkSafe] {
            let json = serde_json::to_string(&action).expect("json");
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
