use rollcall_shared::{
    CurrentActor, ErrorKind, Member, MembershipId, ProjectPermissionAction,
    ProjectPermissionSubject,
};
use tracing::info;

pub struct Workspace {
    pub name: String,
    memberships: Vec<Member>,
}

impl Workspace {
    pub fn new(name: String, memberships: Vec<Member>) -> Self {
        Self { name, memberships }
    }

    /// All memberships in insertion order
    pub fn memberships(&self) -> &[Member] {
        &self.memberships
    }

    pub fn membership(&self, id: &MembershipId) -> Option<&Member> {
        self.memberships.iter().find(|m| &m.id == id)
    }

    /// Remove a membership on behalf of `actor`.
    ///
    /// The actor needs the delete grant on members and can never remove
    /// their own membership.
    pub fn remove_membership(
        &mut self,
        id: &MembershipId,
        actor: &CurrentActor,
    ) -> Result<Member, ErrorKind> {
        if !actor
            .permissions
            .can(ProjectPermissionAction::Delete, ProjectPermissionSubject::Member)
        {
            return Err(ErrorKind::PermissionDenied);
        }

        let Some(index) = self.memberships.iter().position(|m| &m.id == id) else {
            return Err(ErrorKind::MembershipNotFound);
        };
        if self.memberships[index].is_user(&actor.user.id) {
            return Err(ErrorKind::CannotRemoveSelf);
        }

        let removed = self.memberships.remove(index);
        info!(
            workspace = %self.name,
            membership_id = %removed.id,
            username = %removed.username(),
            "Removed project member."
        );
        Ok(removed)
    }
}
