//! Row view-model for the project members table.
//!
//! Everything the table decides per row (labels, which role tags fit inline,
//! whether the delete control is usable) is computed here so the view only
//! has to lay it out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::filter_members;
use crate::ids::{MembershipId, UserId};
use crate::member::Member;
use crate::role::{Role, TemporaryAccess};

pub const MAX_ROLES_SHOWN_INLINE: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct RoleTag {
    pub id: String,
    pub label: String,
    /// `None` for permanent roles.
    pub temporary: Option<TemporaryAccess>,
}

impl RoleTag {
    pub fn new(role: &Role, now: DateTime<Utc>) -> Self {
        Self {
            id: role.id.clone(),
            label: role.label(),
            temporary: role.temporary_access(now),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.temporary.is_some_and(TemporaryAccess::is_expired)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteControl {
    /// The actor's own row has no row actions at all.
    Hidden,
    Disabled,
    Enabled,
}

impl DeleteControl {
    pub fn is_enabled(self) -> bool {
        self == DeleteControl::Enabled
    }
}

/// Per-render inputs that are not part of the member data.
#[derive(Debug, Clone, PartialEq)]
pub struct RowContext {
    pub current_user_id: Option<UserId>,
    pub can_delete_members: bool,
    pub now: DateTime<Utc>,
}

/// Payload of the "remove member" request raised by a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveMemberTarget {
    pub membership_id: MembershipId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberRow {
    pub membership_id: MembershipId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub inline_roles: Vec<RoleTag>,
    pub overflow_roles: Vec<RoleTag>,
    pub delete: DeleteControl,
}

impl MemberRow {
    pub fn new(member: &Member, ctx: &RowContext) -> Self {
        let mut tags = member.roles.iter().map(|r| RoleTag::new(r, ctx.now));
        let inline_roles: Vec<RoleTag> = tags.by_ref().take(MAX_ROLES_SHOWN_INLINE).collect();
        let overflow_roles: Vec<RoleTag> = tags.collect();

        let is_current_user = ctx
            .current_user_id
            .as_ref()
            .is_some_and(|id| member.is_user(id));
        let delete = if is_current_user {
            DeleteControl::Hidden
        } else if ctx.can_delete_members {
            DeleteControl::Enabled
        } else {
            DeleteControl::Disabled
        };

        Self {
            membership_id: member.id.clone(),
            name: member.display_name(),
            email: member.display_email().to_string(),
            username: member.username().to_string(),
            inline_roles,
            overflow_roles,
            delete,
        }
    }

    /// Number shown on the "+N" tag; zero when every role fits inline.
    pub fn overflow_count(&self) -> usize {
        self.overflow_roles.len()
    }

    pub fn remove_target(&self) -> RemoveMemberTarget {
        RemoveMemberTarget {
            membership_id: self.membership_id.clone(),
            username: self.username.clone(),
        }
    }
}

/// Filters `members` by `query` and builds one row per match.
pub fn member_rows(members: &[Member], query: &str, ctx: &RowContext) -> Vec<MemberRow> {
    filter_members(members, query)
        .iter()
        .map(|m| MemberRow::new(m, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberUser;
    use crate::role::ProjectMembershipRole;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    fn ctx(current: Option<&str>, can_delete: bool) -> RowContext {
        RowContext {
            current_user_id: current.map(UserId::from),
            can_delete_members: can_delete,
            now: now(),
        }
    }

    fn member_with_roles(user_id: &str, roles: Vec<Role>) -> Member {
        Member {
            id: "550e8400-e29b-41d4-a716-446655440000".parse().unwrap(),
            user: Some(MemberUser {
                id: UserId::new(user_id),
                first_name: Some("Ann".to_string()),
                last_name: Some("Lee".to_string()),
                username: "ann".to_string(),
                email: Some("ann@x.com".to_string()),
            }),
            invite_email: None,
            roles,
        }
    }

    fn roles(n: usize) -> Vec<Role> {
        (0..n)
            .map(|i| Role::permanent(format!("r{i}"), ProjectMembershipRole::Viewer))
            .collect()
    }

    #[test]
    fn at_most_two_inline_roles() {
        for n in 0..6 {
            let row = MemberRow::new(&member_with_roles("u1", roles(n)), &ctx(None, true));
            assert_eq!(row.inline_roles.len(), n.min(MAX_ROLES_SHOWN_INLINE));
            assert_eq!(row.overflow_count(), n.saturating_sub(MAX_ROLES_SHOWN_INLINE));
        }
    }

    #[test]
    fn overflow_keeps_role_order() {
        let row = MemberRow::new(&member_with_roles("u1", roles(4)), &ctx(None, true));
        let inline: Vec<&str> = row.inline_roles.iter().map(|t| t.id.as_str()).collect();
        let overflow: Vec<&str> = row.overflow_roles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(inline, ["r0", "r1"]);
        assert_eq!(overflow, ["r2", "r3"]);
    }

    #[test]
    fn own_row_never_enabled() {
        let m = member_with_roles("me", roles(1));
        assert_eq!(
            MemberRow::new(&m, &ctx(Some("me"), true)).delete,
            DeleteControl::Hidden
        );
        assert_eq!(
            MemberRow::new(&m, &ctx(Some("me"), false)).delete,
            DeleteControl::Hidden
        );
    }

    #[test]
    fn delete_follows_permission_for_others() {
        let m = member_with_roles("other", roles(1));
        assert_eq!(
            MemberRow::new(&m, &ctx(Some("me"), true)).delete,
            DeleteControl::Enabled
        );
        assert_eq!(
            MemberRow::new(&m, &ctx(Some("me"), false)).delete,
            DeleteControl::Disabled
        );
    }

    #[test]
    fn pending_invite_row() {
        let m = Member {
            user: None,
            invite_email: Some("new@x.com".to_string()),
            ..member_with_roles("u1", roles(1))
        };
        let row = MemberRow::new(&m, &ctx(Some("me"), true));
        assert_eq!(row.name, "-");
        assert_eq!(row.email, "new@x.com");
        assert_eq!(row.delete, DeleteControl::Enabled);
        assert_eq!(row.remove_target().username, "new@x.com");
    }

    #[test]
    fn tags_carry_expiry_state() {
        let m = member_with_roles(
            "u1",
            vec![
                Role::permanent("a", ProjectMembershipRole::Member),
                Role::temporary(
                    "b",
                    ProjectMembershipRole::Admin,
                    Some(now() + Duration::hours(1)),
                ),
                Role::temporary(
                    "c",
                    ProjectMembershipRole::Viewer,
                    Some(now() - Duration::hours(1)),
                ),
            ],
        );
        let row = MemberRow::new(&m, &ctx(None, false));
        assert_eq!(row.inline_roles[0].label, "Developer");
        assert_eq!(row.inline_roles[0].temporary, None);
        assert_eq!(row.inline_roles[1].temporary, Some(TemporaryAccess::Active));
        assert!(row.overflow_roles[0].is_expired());
    }

    #[test]
    fn rows_follow_filter() {
        let members = vec![member_with_roles("u1", roles(1))];
        assert_eq!(member_rows(&members, "ann", &ctx(None, true)).len(), 1);
        assert!(member_rows(&members, "zzz", &ctx(None, true)).is_empty());
    }

    #[test]
    fn remove_target_carries_username() {
        let row = MemberRow::new(&member_with_roles("u1", roles(1)), &ctx(None, true));
        let target = row.remove_target();
        assert_eq!(target.username, "ann");
        assert_eq!(target.membership_id, row.membership_id);
    }
}
