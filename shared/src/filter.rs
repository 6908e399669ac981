use crate::member::Member;

/// Whether `member` matches a search query.
///
/// The query is lowercased and compared against the lowercased name parts,
/// username and email. Invite emails are compared as stored: the membership
/// service keeps them lowercased, so only the query side is folded.
pub fn member_matches(member: &Member, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    let user_match = member.user.as_ref().is_some_and(|u| {
        [
            u.first_name.as_deref(),
            u.last_name.as_deref(),
            Some(u.username.as_str()),
            u.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    });

    user_match
        || member
            .invite_email
            .as_deref()
            .is_some_and(|invite| invite.contains(&query))
}

/// Members matching `query`, in their original order.
pub fn filter_members(members: &[Member], query: &str) -> Vec<Member> {
    members
        .iter()
        .filter(|m| member_matches(m, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use crate::member::MemberUser;
    use crate::role::{ProjectMembershipRole, Role};

    fn member(n: u8, first: &str, last: &str, username: &str, email: &str) -> Member {
        Member {
            id: format!("00000000-0000-0000-0000-0000000000{n:02x}")
                .parse()
                .unwrap(),
            user: Some(MemberUser {
                id: UserId::new(format!("u{n}")),
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                username: username.to_string(),
                email: Some(email.to_string()),
            }),
            invite_email: None,
            roles: vec![Role::permanent("r", ProjectMembershipRole::Member)],
        }
    }

    fn invite(n: u8, email: &str) -> Member {
        Member {
            id: format!("00000000-0000-0000-0000-0000000000{n:02x}")
                .parse()
                .unwrap(),
            user: None,
            invite_email: Some(email.to_string()),
            roles: vec![],
        }
    }

    fn roster() -> Vec<Member> {
        vec![
            member(1, "Ann", "Lee", "annlee", "ann@x.com"),
            member(2, "Bob", "Stone", "bstone", "bob@corp.io"),
            invite(3, "carol@x.com"),
            member(4, "Dana", "Annis", "dana", "d@corp.io"),
        ]
    }

    fn ids(members: &[Member]) -> Vec<String> {
        members.iter().map(|m| m.id.to_string()).collect()
    }

    #[test]
    fn finds_single_member_by_first_name() {
        let members = vec![member(1, "Ann", "Lee", "ann", "ann@x.com")];
        assert_eq!(filter_members(&members, "ann").len(), 1);
        assert!(filter_members(&members, "zzz").is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let mut members = roster();
        members.push(Member {
            user: None,
            invite_email: None,
            ..invite(5, "")
        });
        assert_eq!(filter_members(&members, ""), members);
    }

    #[test]
    fn query_is_case_insensitive_for_user_fields() {
        let members = roster();
        assert_eq!(filter_members(&members, "STONE").len(), 1);
        assert_eq!(filter_members(&members, "Corp.IO").len(), 2);
        assert_eq!(filter_members(&members, "BsToNe").len(), 1);
    }

    #[test]
    fn matches_across_fields_preserving_order() {
        let members = roster();
        let found = filter_members(&members, "ann");
        assert_eq!(ids(&found), ids(&[members[0].clone(), members[3].clone()]));
    }

    #[test]
    fn matches_invite_email() {
        let members = roster();
        let found = filter_members(&members, "Carol");
        assert_eq!(found.len(), 1);
        assert!(found[0].user.is_none());
    }

    #[test]
    fn invite_email_is_not_case_folded() {
        let members = vec![invite(1, "Carol@X.com")];
        assert!(filter_members(&members, "carol").is_empty());
        assert!(filter_members(&members, "x.com").is_empty());
        assert_eq!(filter_members(&members, ".com").len(), 1);
    }

    #[test]
    fn member_without_user_or_invite_never_matches_text() {
        let ghost = Member {
            user: None,
            invite_email: None,
            ..invite(1, "")
        };
        assert!(!member_matches(&ghost, "a"));
        assert!(member_matches(&ghost, ""));
    }

    #[test]
    fn input_is_not_mutated() {
        let members = roster();
        let before = members.clone();
        let _ = filter_members(&members, "bob");
        assert_eq!(members, before);
    }
}
