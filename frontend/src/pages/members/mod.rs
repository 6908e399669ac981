mod members_table;
mod remove_member_dialog;
mod role_tags;

use dioxus::prelude::*;
use rollcall_shared::{RemoveMemberTarget, WorkspaceId};

use crate::api;
use crate::hooks::use_workspace_members;
use crate::Route;

pub use members_table::MembersTable;
pub use remove_member_dialog::RemoveMemberDialog;
pub use role_tags::{RoleTagChip, TagPlacement};

#[component]
pub fn MembersPage(workspace_id: String) -> Element {
    match workspace_id.parse::<WorkspaceId>() {
        Ok(workspace_id) => rsx! {
            ProjectMembers { workspace_id }
        },
        Err(e) => rsx! {
            div { class: "min-h-screen bg-gray-950 flex items-center justify-center p-4",
                div { class: "text-center",
                    div { class: "text-red-400 text-xl mb-4", "{e}" }
                    Link {
                        to: Route::Home {},
                        class: "text-purple-400 hover:text-purple-300 underline",
                        "Go back home"
                    }
                }
            }
        },
    }
}

/// Owns the data fetches and the remove-member popup for the members table.
#[component]
fn ProjectMembers(workspace_id: WorkspaceId) -> Element {
    let actor = use_resource(|| async move {
        match api::get_current_actor().await {
            Ok(actor) => Some(actor),
            Err(e) => {
                tracing::error!("Failed to load current user: {}", e);
                None
            }
        }
    });
    let members = use_workspace_members(workspace_id.clone());
    let mut remove_target = use_signal(|| None::<RemoveMemberTarget>);
    let mut remove_error = use_signal(|| None::<String>);
    let mut removing = use_signal(|| false);

    use_effect({
        let workspace_id = workspace_id.clone();
        move || api::set_last_workspace(&workspace_id)
    });

    let actor = actor.cloned().flatten();
    let current_user_id = actor.as_ref().map(|a| a.user.id.clone());
    let permissions = actor.map(|a| a.permissions).unwrap_or_default();

    let confirm_removal = {
        let workspace_id = workspace_id.clone();
        move |target: RemoveMemberTarget| {
            let workspace_id = workspace_id.clone();
            spawn(async move {
                removing.set(true);
                remove_error.set(None);

                match api::remove_membership(&workspace_id, &target.membership_id).await {
                    Ok(()) => {
                        tracing::info!(username = %target.username, "Removed member");
                        remove_target.set(None);
                        members.refetch();
                    }
                    Err(e) => {
                        tracing::error!("Failed to remove member: {}", e);
                        remove_error.set(Some(e));
                    }
                }
                removing.set(false);
            });
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gray-950",
            // Header
            div { class: "bg-gray-900/80 border-b border-purple-900/50 px-4 py-3 flex items-center gap-4",
                Link { to: Route::Home {},
                    h1 { class: "text-white font-semibold hover:text-purple-300 transition-colors cursor-pointer", "Rollcall" }
                }
                span { class: "text-gray-400 text-sm", "Project: {workspace_id}" }
            }

            div { class: "max-w-5xl mx-auto p-6",
                h2 { class: "text-2xl font-bold text-white mb-6", "Project Members" }
                MembersTable {
                    workspace_id: workspace_id.clone(),
                    current_user_id,
                    permissions,
                    members,
                    on_remove_member: move |target: RemoveMemberTarget| {
                        remove_error.set(None);
                        remove_target.set(Some(target));
                    },
                }
            }

            if let Some(target) = remove_target() {
                RemoveMemberDialog {
                    target,
                    removing: removing(),
                    error: remove_error(),
                    on_confirm: confirm_removal,
                    on_cancel: move |_| remove_target.set(None),
                }
            }
        }
    }
}
