mod filter;
mod ids;
mod member;
mod permission;
mod role;
mod table;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use filter::{filter_members, member_matches};
pub use ids::{IdError, MembershipId, UserId, WorkspaceId};
pub use member::{Member, MemberUser};
pub use permission::{
    CurrentActor, PermissionGrant, ProjectPermissionAction, ProjectPermissionSubject,
    ProjectPermissions,
};
pub use role::{ProjectMembershipRole, Role, TemporaryAccess, format_role_name};
pub use table::{
    DeleteControl, MAX_ROLES_SHOWN_INLINE, MemberRow, RemoveMemberTarget, RoleTag, RowContext,
    member_rows,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    WorkspaceNotFound,
    MembershipNotFound,
    PermissionDenied,
    CannotRemoveSelf,
    Other { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::WorkspaceNotFound => write!(f, "Project not found"),
            ErrorKind::MembershipNotFound => write!(f, "Member not found"),
            ErrorKind::PermissionDenied => write!(f, "You are not allowed to do that"),
            ErrorKind::CannotRemoveSelf => write!(f, "You cannot remove yourself"),
            ErrorKind::Other { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Response from GET /api/workspaces/:id/memberships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMembershipsResponse {
    pub memberships: Vec<Member>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_wire_format() {
        let json = serde_json::to_string(&ErrorKind::CannotRemoveSelf).unwrap();
        assert_eq!(json, r#"{"kind":"cannot_remove_self"}"#);

        let other: ErrorKind =
            serde_json::from_str(r#"{"kind":"other","message":"boom"}"#).unwrap();
        assert_eq!(other.to_string(), "boom");
    }
}
