use dioxus::prelude::*;
use rollcall_shared::WorkspaceId;

use crate::api;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut error = use_signal(|| None::<String>);
    let mut workspace_input = use_signal(|| {
        api::get_last_workspace()
            .map(|w| w.to_string())
            .unwrap_or_default()
    });
    let navigator = use_navigator();

    let mut open_workspace = move || {
        let workspace_id: WorkspaceId = match workspace_input().parse() {
            Ok(w) => w,
            Err(e) => {
                error.set(Some(format!("{}", e)));
                return;
            }
        };

        error.set(None);
        api::set_last_workspace(&workspace_id);
        navigator.push(Route::MembersPage {
            workspace_id: workspace_id.into_inner(),
        });
    };

    rsx! {
        div { class: "min-h-screen bg-gray-950 flex items-center justify-center p-4",
            div { class: "max-w-md w-full text-center",
                h1 { class: "text-5xl font-bold text-white mb-4", "Rollcall" }
                p { class: "text-purple-300 mb-8 text-lg",
                    "See who has access to your project"
                }

                div { class: "bg-gray-900/90 border border-purple-900/50 rounded-lg p-6 mb-6",
                    input {
                        class: "w-full bg-gray-700 text-white px-4 py-3 rounded-lg mb-4 focus:outline-none focus:ring-2 focus:ring-purple-500",
                        r#type: "text",
                        placeholder: "Project ID",
                        value: "{workspace_input}",
                        oninput: move |e| workspace_input.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                open_workspace();
                            }
                        },
                    }

                    if let Some(err) = error() {
                        p { class: "text-red-400 text-sm mb-4", "{err}" }
                    }

                    button {
                        class: "w-full bg-purple-600 hover:bg-purple-700 text-white font-semibold py-3 rounded-lg transition-colors text-lg",
                        onclick: move |_| open_workspace(),
                        "Open Members"
                    }
                }
            }
        }
    }
}
