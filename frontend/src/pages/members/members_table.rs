use chrono::Utc;
use dioxus::prelude::*;
use rollcall_shared::{
    DeleteControl, MemberRow, ProjectPermissionAction, ProjectPermissionSubject,
    ProjectPermissions, RemoveMemberTarget, RowContext, UserId, WorkspaceId, member_rows,
};

use super::role_tags::RoleTags;
use crate::Route;
use crate::hooks::WorkspaceMembers;

const TABLE_COLUMNS: usize = 4;
const SKELETON_ROWS: usize = 3;

#[component]
pub fn MembersTable(
    workspace_id: WorkspaceId,
    current_user_id: Option<UserId>,
    permissions: ProjectPermissions,
    members: WorkspaceMembers,
    on_remove_member: EventHandler<RemoveMemberTarget>,
) -> Element {
    let mut search_filter = use_signal(String::new);

    let is_loading = members.is_loading();
    // Expiry is evaluated against the time of this render.
    let ctx = RowContext {
        current_user_id,
        can_delete_members: permissions
            .can(ProjectPermissionAction::Delete, ProjectPermissionSubject::Member),
        now: Utc::now(),
    };
    let query = search_filter();
    let rows = members
        .data()
        .map(|members| member_rows(&members, &query, &ctx))
        .unwrap_or_default();

    rsx! {
        div {
            div { class: "relative",
                span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-500", "\u{1F50D}" }
                input {
                    class: "w-full bg-gray-800 text-white pl-10 pr-4 py-2 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500",
                    r#type: "text",
                    placeholder: "Search members...",
                    value: "{search_filter}",
                    oninput: move |e| search_filter.set(e.value()),
                }
            }

            div { class: "mt-4 bg-gray-900/90 border border-purple-900/50 rounded-lg overflow-hidden",
                table { class: "w-full text-sm text-left",
                    thead { class: "bg-gray-800 text-gray-400",
                        tr {
                            th { class: "px-4 py-3", "Name" }
                            th { class: "px-4 py-3", "Username" }
                            th { class: "px-4 py-3", "Role" }
                            th { class: "px-4 py-3 w-5" }
                        }
                    }
                    tbody {
                        if is_loading {
                            for i in 0..SKELETON_ROWS {
                                tr { key: "project-members-skeleton-{i}",
                                    for c in 0..TABLE_COLUMNS {
                                        td { key: "{c}", class: "px-4 py-3",
                                            div { class: "h-4 bg-gray-700 rounded animate-pulse" }
                                        }
                                    }
                                }
                            }
                        } else {
                            for row in rows.iter() {
                                MemberTableRow {
                                    key: "membership-{row.membership_id}",
                                    workspace_id: workspace_id.clone(),
                                    row: row.clone(),
                                    on_remove_member,
                                }
                            }
                        }
                    }
                }
                if !is_loading && rows.is_empty() {
                    div { class: "flex flex-col items-center py-12 text-gray-500",
                        span { class: "text-3xl mb-2", "\u{1F465}" }
                        p { "No project members found" }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberTableRow(
    workspace_id: WorkspaceId,
    row: MemberRow,
    on_remove_member: EventHandler<RemoveMemberTarget>,
) -> Element {
    let navigator = use_navigator();
    let detail = Route::MemberDetail {
        workspace_id: workspace_id.to_string(),
        membership_id: row.membership_id.to_string(),
    };

    let open_on_click = {
        let detail = detail.clone();
        move |_| {
            navigator.push(detail.clone());
        }
    };
    let open_on_enter = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            navigator.push(detail.clone());
        }
    };
    let request_removal = {
        let target = row.remove_target();
        move |e: MouseEvent| {
            // Keep the click from reaching the row and navigating away.
            e.prevent_default();
            e.stop_propagation();
            on_remove_member.call(target.clone());
        }
    };

    rsx! {
        tr {
            class: "group w-full cursor-pointer border-t border-gray-800 text-gray-200 transition-colors duration-100 hover:bg-gray-800",
            role: "button",
            tabindex: "0",
            onclick: open_on_click,
            onkeydown: open_on_enter,
            td { class: "px-4 py-3", "{row.name}" }
            td { class: "px-4 py-3", "{row.email}" }
            td { class: "px-4 py-3",
                RoleTags {
                    inline: row.inline_roles.clone(),
                    overflow: row.overflow_roles.clone(),
                }
            }
            td { class: "px-4 py-3",
                if row.delete != DeleteControl::Hidden {
                    div { class: "flex items-center gap-2 opacity-0 transition-opacity duration-300 group-hover:opacity-100",
                        button {
                            class: "ml-4 text-red-500 hover:text-red-400 disabled:opacity-40 disabled:cursor-not-allowed",
                            aria_label: "Remove member",
                            disabled: !row.delete.is_enabled(),
                            onclick: request_removal,
                            "\u{1F5D1}"
                        }
                        button {
                            class: "text-gray-400 hover:text-white",
                            aria_label: "More actions",
                            onclick: move |e: MouseEvent| e.stop_propagation(),
                            "\u{22EE}"
                        }
                    }
                }
            }
        }
    }
}
