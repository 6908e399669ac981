use dioxus::prelude::*;
use rollcall_shared::{Member, WorkspaceId};

use crate::api;

/// Handle to the member list of one workspace.
///
/// A failed fetch is logged and leaves the handle loading; there is no
/// separate error state.
#[derive(Clone, Copy, PartialEq)]
pub struct WorkspaceMembers {
    resource: Resource<Option<Vec<Member>>>,
}

impl WorkspaceMembers {
    pub fn data(&self) -> Option<Vec<Member>> {
        self.resource.cloned().flatten()
    }

    pub fn is_loading(&self) -> bool {
        !matches!(&*self.resource.read(), Some(Some(_)))
    }

    pub fn refetch(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}

pub fn use_workspace_members(workspace_id: WorkspaceId) -> WorkspaceMembers {
    let resource = use_resource(use_reactive((&workspace_id,), |(workspace_id,)| async move {
        match api::get_workspace_memberships(&workspace_id).await {
            Ok(members) => {
                tracing::debug!(%workspace_id, count = members.len(), "Loaded members");
                Some(members)
            }
            Err(e) => {
                tracing::error!(%workspace_id, "Failed to load members: {}", e);
                None
            }
        }
    }));

    WorkspaceMembers { resource }
}
