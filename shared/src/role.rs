use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in project role kinds. Any slug the membership service sends that is
/// not one of these is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectMembershipRole {
    Admin,
    Member,
    Viewer,
    NoAccess,
    Custom,
    Other(String),
}

impl ProjectMembershipRole {
    pub fn slug(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
            Self::NoAccess => "no-access",
            Self::Custom => "custom",
            Self::Other(slug) => slug,
        }
    }
}

impl From<String> for ProjectMembershipRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Self::Admin,
            "member" => Self::Member,
            "viewer" => Self::Viewer,
            "no-access" => Self::NoAccess,
            "custom" => Self::Custom,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ProjectMembershipRole {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<ProjectMembershipRole> for String {
    fn from(r: ProjectMembershipRole) -> Self {
        match r {
            ProjectMembershipRole::Other(slug) => slug,
            other => other.slug().to_string(),
        }
    }
}

impl fmt::Display for ProjectMembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Human-readable label for a role.
///
/// `Member` is presented as "Developer" and custom roles by their user-defined
/// name; every other role shows its slug as-is.
pub fn format_role_name(role: &ProjectMembershipRole, custom_role_name: Option<&str>) -> String {
    match role {
        ProjectMembershipRole::Custom => custom_role_name.unwrap_or_default().to_string(),
        ProjectMembershipRole::Member => "Developer".to_string(),
        ProjectMembershipRole::NoAccess => "No access".to_string(),
        other => other.slug().to_string(),
    }
}

/// State of a timed role grant at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporaryAccess {
    Active,
    Expired,
}

impl TemporaryAccess {
    pub fn is_expired(self) -> bool {
        self == TemporaryAccess::Expired
    }

    /// Tooltip shown next to tags rendered inline in a table row.
    pub fn inline_tooltip(self) -> &'static str {
        match self {
            TemporaryAccess::Active => "Timed role access",
            TemporaryAccess::Expired => "Timed role expired",
        }
    }

    /// Tooltip shown next to tags inside the overflow hover card.
    pub fn overflow_tooltip(self) -> &'static str {
        match self {
            TemporaryAccess::Active => "Temporary access",
            TemporaryAccess::Expired => "Access expired",
        }
    }
}

/// A role granted to a membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub role: ProjectMembershipRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_role_name: Option<String>,
    #[serde(default)]
    pub is_temporary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary_access_end_time: Option<DateTime<Utc>>,
}

impl Role {
    pub fn permanent(id: impl Into<String>, role: ProjectMembershipRole) -> Self {
        Self {
            id: id.into(),
            role,
            custom_role_name: None,
            is_temporary: false,
            temporary_access_end_time: None,
        }
    }

    pub fn temporary(
        id: impl Into<String>,
        role: ProjectMembershipRole,
        end_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            is_temporary: true,
            temporary_access_end_time: end_time,
            ..Self::permanent(id, role)
        }
    }

    pub fn label(&self) -> String {
        format_role_name(&self.role, self.custom_role_name.as_deref())
    }

    /// True once `now` is strictly past the end time. A missing end time
    /// counts as already elapsed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.temporary_access_end_time {
            Some(end) => now > end,
            None => true,
        }
    }

    /// `None` for permanent grants.
    pub fn temporary_access(&self, now: DateTime<Utc>) -> Option<TemporaryAccess> {
        if !self.is_temporary {
            return None;
        }
        Some(if self.is_expired(now) {
            TemporaryAccess::Expired
        } else {
            TemporaryAccess::Active
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn custom_role_uses_custom_name() {
        let label = format_role_name(&ProjectMembershipRole::Custom, Some("Release Manager"));
        assert_eq!(label, "Release Manager");
    }

    #[test]
    fn custom_role_without_name_is_empty() {
        assert_eq!(format_role_name(&ProjectMembershipRole::Custom, None), "");
    }

    #[test]
    fn builtin_role_labels() {
        assert_eq!(
            format_role_name(&ProjectMembershipRole::Member, None),
            "Developer"
        );
        assert_eq!(
            format_role_name(&ProjectMembershipRole::NoAccess, None),
            "No access"
        );
        assert_eq!(format_role_name(&ProjectMembershipRole::Admin, None), "admin");
        assert_eq!(
            format_role_name(&ProjectMembershipRole::Viewer, Some("ignored")),
            "viewer"
        );
    }

    #[test]
    fn unknown_role_passes_through() {
        let role: ProjectMembershipRole = "auditor".into();
        assert_eq!(role, ProjectMembershipRole::Other("auditor".to_string()));
        assert_eq!(format_role_name(&role, None), "auditor");
    }

    #[test]
    fn role_slug_serde() {
        let role: ProjectMembershipRole = serde_json::from_str("\"no-access\"").unwrap();
        assert_eq!(role, ProjectMembershipRole::NoAccess);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"no-access\"");

        let other: ProjectMembershipRole = serde_json::from_str("\"billing\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"billing\"");
    }

    #[test]
    fn expired_only_strictly_after_end() {
        let end = at(0);
        let role = Role::temporary("r1", ProjectMembershipRole::Viewer, Some(end));

        assert!(!role.is_expired(end - Duration::seconds(1)));
        assert!(!role.is_expired(end));
        assert!(role.is_expired(end + Duration::milliseconds(1)));
    }

    #[test]
    fn missing_end_time_counts_as_expired() {
        let role = Role::temporary("r1", ProjectMembershipRole::Viewer, None);
        assert!(role.is_expired(at(0)));
        assert_eq!(role.temporary_access(at(0)), Some(TemporaryAccess::Expired));
    }

    #[test]
    fn permanent_role_has_no_temporary_state() {
        let role = Role::permanent("r1", ProjectMembershipRole::Admin);
        assert_eq!(role.temporary_access(at(0)), None);
    }

    #[test]
    fn temporary_state_changes_with_evaluation_time() {
        let role = Role::temporary("r1", ProjectMembershipRole::Member, Some(at(60)));
        assert_eq!(role.temporary_access(at(0)), Some(TemporaryAccess::Active));
        assert_eq!(role.temporary_access(at(61)), Some(TemporaryAccess::Expired));
    }

    #[test]
    fn tooltips() {
        assert_eq!(TemporaryAccess::Active.inline_tooltip(), "Timed role access");
        assert_eq!(TemporaryAccess::Expired.inline_tooltip(), "Timed role expired");
        assert_eq!(TemporaryAccess::Active.overflow_tooltip(), "Temporary access");
        assert_eq!(TemporaryAccess::Expired.overflow_tooltip(), "Access expired");
    }

    #[test]
    fn role_wire_format() {
        let json = r#"{
            "id": "r9",
            "role": "custom",
            "customRoleName": "Auditor",
            "isTemporary": true,
            "temporaryAccessEndTime": "2024-05-01T12:00:00Z"
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.role, ProjectMembershipRole::Custom);
        assert_eq!(role.label(), "Auditor");
        assert!(role.is_temporary);
        assert_eq!(
            role.temporary_access_end_time,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn role_defaults_to_permanent() {
        let role: Role = serde_json::from_str(r#"{"id":"r1","role":"member"}"#).unwrap();
        assert!(!role.is_temporary);
        assert_eq!(role.temporary_access_end_time, None);
    }
}
