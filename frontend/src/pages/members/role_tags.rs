use dioxus::prelude::*;
use rollcall_shared::{RoleTag, TemporaryAccess};

const TAG_CLASS: &str =
    "inline-flex items-center gap-2 bg-gray-800 text-gray-200 text-xs px-2 py-1 rounded";

/// Where a tag is drawn; the timed-access tooltip wording differs between the two.
#[derive(Clone, Copy, PartialEq)]
pub enum TagPlacement {
    Inline,
    HoverCard,
}

fn tooltip(access: TemporaryAccess, placement: TagPlacement) -> &'static str {
    match placement {
        TagPlacement::Inline => access.inline_tooltip(),
        TagPlacement::HoverCard => access.overflow_tooltip(),
    }
}

#[component]
pub fn RoleTagChip(tag: RoleTag, placement: TagPlacement) -> Element {
    rsx! {
        span { class: TAG_CLASS,
            span { class: "capitalize", "{tag.label}" }
            if let Some(access) = tag.temporary {
                span {
                    title: tooltip(access, placement),
                    class: if access.is_expired() { "text-red-600" } else { "text-gray-400" },
                    // clock
                    "\u{1F552}"
                }
            }
        }
    }
}

/// Inline role tags plus a "+N" tag that reveals the remaining roles on hover.
#[component]
pub fn RoleTags(inline: Vec<RoleTag>, overflow: Vec<RoleTag>) -> Element {
    let mut show_overflow = use_signal(|| false);
    let overflow_count = overflow.len();

    rsx! {
        div { class: "flex items-center gap-2",
            for tag in inline.iter() {
                RoleTagChip {
                    key: "{tag.id}",
                    tag: tag.clone(),
                    placement: TagPlacement::Inline,
                }
            }
            if overflow_count > 0 {
                div {
                    class: "relative",
                    onmouseenter: move |_| show_overflow.set(true),
                    onmouseleave: move |_| show_overflow.set(false),
                    span { class: TAG_CLASS, "+{overflow_count}" }
                    if show_overflow() {
                        div { class: "absolute left-0 top-full z-10 mt-1 flex flex-col gap-2 border border-gray-700 bg-gray-900 p-4 rounded-lg shadow-lg",
                            for tag in overflow.iter() {
                                RoleTagChip {
                                    key: "{tag.id}",
                                    tag: tag.clone(),
                                    placement: TagPlacement::HoverCard,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
