use chrono::Utc;
use dioxus::prelude::*;
use rollcall_shared::{Member, MembershipId, Role, RoleTag, WorkspaceId};

use super::members::{RoleTagChip, TagPlacement};
use crate::api;
use crate::Route;

#[component]
pub fn MemberDetail(workspace_id: String, membership_id: String) -> Element {
    let ids = workspace_id
        .parse::<WorkspaceId>()
        .map_err(|e| e.to_string())
        .and_then(|w| {
            membership_id
                .parse::<MembershipId>()
                .map(|m| (w, m))
                .map_err(|e| e.to_string())
        });

    match ids {
        Ok((workspace_id, membership_id)) => rsx! {
            MembershipView { workspace_id, membership_id }
        },
        Err(msg) => rsx! {
            DetailError { message: msg }
        },
    }
}

#[component]
fn DetailError(message: String) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-950 flex items-center justify-center p-4",
            div { class: "text-center",
                div { class: "text-red-400 text-xl mb-4", "{message}" }
                Link {
                    to: Route::Home {},
                    class: "text-purple-400 hover:text-purple-300 underline",
                    "Go back home"
                }
            }
        }
    }
}

#[component]
fn MembershipView(workspace_id: WorkspaceId, membership_id: MembershipId) -> Element {
    let membership = use_resource(use_reactive(
        (&workspace_id, &membership_id),
        |(workspace_id, membership_id)| async move {
            api::get_membership(&workspace_id, &membership_id).await
        },
    ));
    let back = Route::MembersPage {
        workspace_id: workspace_id.to_string(),
    };

    rsx! {
        div { class: "min-h-screen bg-gray-950 p-6",
            div { class: "max-w-2xl mx-auto",
                Link {
                    to: back,
                    class: "text-purple-400 hover:text-purple-300 text-sm",
                    "\u{2190} Back to members"
                }

                match &*membership.read() {
                    Some(Ok(member)) => rsx! {
                        MemberCard { member: member.clone() }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "mt-6 bg-red-950/50 border border-red-900 text-red-300 p-4 rounded-lg",
                            "{e}"
                        }
                    },
                    None => rsx! {
                        div { class: "mt-6 text-white text-xl", "Loading..." }
                    },
                }
            }
        }
    }
}

fn expiry_note(role: &Role) -> String {
    match role.temporary_access_end_time {
        Some(end) => format!("until {}", end.format("%Y-%m-%d %H:%M UTC")),
        None => "no end time".to_string(),
    }
}

#[component]
fn MemberCard(member: Member) -> Element {
    let now = Utc::now();
    let name = member.display_name();
    let email = member.display_email().to_string();
    let username = member.username().to_string();
    let status = if member.user.is_some() {
        "Active"
    } else {
        "Invited"
    };

    rsx! {
        div { class: "mt-6 bg-gray-900/90 border border-purple-900/50 rounded-lg p-6",
            h1 { class: "text-2xl font-bold text-white", "{name}" }
            p { class: "text-gray-400 mt-1", "{email}" }

            dl { class: "mt-6 grid grid-cols-2 gap-4 text-sm",
                dt { class: "text-gray-500", "Username" }
                dd { class: "text-gray-200", "{username}" }
                dt { class: "text-gray-500", "Status" }
                dd { class: "text-gray-200", "{status}" }
            }

            h3 { class: "text-gray-400 text-sm font-semibold mt-6 mb-3", "Roles" }
            div { class: "space-y-2",
                for role in member.roles.iter() {
                    div { key: "{role.id}", class: "flex items-center gap-3",
                        RoleTagChip {
                            tag: RoleTag::new(role, now),
                            placement: TagPlacement::Inline,
                        }
                        if role.is_temporary {
                            span { class: "text-gray-500 text-xs", {expiry_note(role)} }
                        }
                    }
                }
                if member.roles.is_empty() {
                    div { class: "text-gray-500 text-sm", "No roles assigned" }
                }
            }
        }
    }
}
