use serde::{Deserialize, Serialize};

use crate::ids::{MembershipId, UserId};
use crate::role::Role;

/// Profile of a registered user as exposed to project members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    pub id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A project membership: either a registered user or a pending invite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MembershipId,
    #[serde(default)]
    pub user: Option<MemberUser>,
    #[serde(default)]
    pub invite_email: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl Member {
    /// First and last name joined by a space, or "-" when neither is known.
    pub fn display_name(&self) -> String {
        let Some(user) = &self.user else {
            return "-".to_string();
        };
        let parts: Vec<&str> = [non_empty(&user.first_name), non_empty(&user.last_name)]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// The user's email, falling back to the invite address.
    pub fn display_email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| non_empty(&u.email))
            .or_else(|| non_empty(&self.invite_email))
            .unwrap_or("")
    }

    /// Username used to address the member in removal prompts.
    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .or(self.invite_email.as_deref())
            .unwrap_or("")
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }

    pub fn is_user(&self, user_id: &UserId) -> bool {
        self.user_id() == Some(user_id)
    }
}
