use serde::{Deserialize, Serialize};

use crate::member::MemberUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPermissionAction {
    Read,
    Create,
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPermissionSubject {
    Member,
    Role,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub action: ProjectPermissionAction,
    pub subject: ProjectPermissionSubject,
}

/// Grants the permission service resolved for the current actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPermissions {
    grants: Vec<PermissionGrant>,
}

impl ProjectPermissions {
    pub fn new(grants: Vec<PermissionGrant>) -> Self {
        Self { grants }
    }

    pub fn can(&self, action: ProjectPermissionAction, subject: ProjectPermissionSubject) -> bool {
        self.grants
            .iter()
            .any(|g| g.action == action && g.subject == subject)
    }

    pub fn grants(&self) -> &[PermissionGrant] {
        &self.grants
    }
}

/// The signed-in user together with their project permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentActor {
    pub user: MemberUser,
    pub permissions: ProjectPermissions,
}
