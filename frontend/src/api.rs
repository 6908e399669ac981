use gloo_net::http::{Request, Response};
use gloo_storage::{LocalStorage, Storage};
use rollcall_shared::{
    CurrentActor, ErrorKind, ListMembershipsResponse, Member, MembershipId, WorkspaceId,
};

const API_BASE: &str = "/api";

/// Prefer the server's error payload over the bare status code
async fn error_message(response: Response, action: &str) -> String {
    match response.json::<ErrorKind>().await {
        Ok(kind) => kind.to_string(),
        Err(_) => format!("Failed to {}: {}", action, response.status()),
    }
}

/// Get the signed-in user and their project permissions
pub async fn get_current_actor() -> Result<CurrentActor, String> {
    let response = Request::get(&format!("{}/me", API_BASE))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response, "load current user").await)
    }
}

/// List every membership of a workspace
pub async fn get_workspace_memberships(workspace_id: &WorkspaceId) -> Result<Vec<Member>, String> {
    let response = Request::get(&format!(
        "{}/workspaces/{}/memberships",
        API_BASE, workspace_id
    ))
    .send()
    .await
    .map_err(|e| e.to_string())?;

    if response.ok() {
        response
            .json::<ListMembershipsResponse>()
            .await
            .map(|r| r.memberships)
            .map_err(|e| e.to_string())
    } else {
        Err(error_message(response, "load members").await)
    }
}

pub async fn get_membership(
    workspace_id: &WorkspaceId,
    membership_id: &MembershipId,
) -> Result<Member, String> {
    let response = Request::get(&format!(
        "{}/workspaces/{}/memberships/{}",
        API_BASE, workspace_id, membership_id
    ))
    .send()
    .await
    .map_err(|e| e.to_string())?;

    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response, "load member").await)
    }
}

/// Remove a member from the project (requires the delete grant on members)
pub async fn remove_membership(
    workspace_id: &WorkspaceId,
    membership_id: &MembershipId,
) -> Result<(), String> {
    let response = Request::delete(&format!(
        "{}/workspaces/{}/memberships/{}",
        API_BASE, workspace_id, membership_id
    ))
    .send()
    .await
    .map_err(|e| e.to_string())?;

    if response.ok() || response.status() == 204 {
        Ok(())
    } else {
        Err(error_message(response, "remove member").await)
    }
}

/// Get the last opened workspace
pub fn get_last_workspace() -> Option<WorkspaceId> {
    LocalStorage::get("last_workspace").ok()
}

/// Store the last opened workspace
pub fn set_last_workspace(workspace_id: &WorkspaceId) {
    let _ = LocalStorage::set("last_workspace", workspace_id);
}
