use dioxus::prelude::*;
use rollcall_shared::RemoveMemberTarget;

#[component]
pub fn RemoveMemberDialog(
    target: RemoveMemberTarget,
    removing: bool,
    error: Option<String>,
    on_confirm: EventHandler<RemoveMemberTarget>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm = {
        let target = target.clone();
        move |_| on_confirm.call(target.clone())
    };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4",
            div { class: "bg-gray-900 border border-purple-900/50 rounded-lg p-6 max-w-md w-full",
                h2 { class: "text-xl font-bold text-white mb-2", "Remove member" }
                p { class: "text-gray-300 mb-6",
                    "Do you want to remove {target.username} from the project?"
                }

                if let Some(err) = error {
                    p { class: "text-red-400 text-sm mb-4", "{err}" }
                }

                div { class: "flex justify-end gap-3",
                    button {
                        class: "bg-gray-700 hover:bg-gray-600 text-white px-4 py-2 rounded transition-colors",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: removing,
                        onclick: confirm,
                        if removing {
                            "Removing..."
                        } else {
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
