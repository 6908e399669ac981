#![allow(non_snake_case)]

mod api;
mod hooks;
mod pages;

use dioxus::prelude::*;

use pages::{Home, MemberDetail, MembersPage};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/project/:workspace_id/members")]
    MembersPage { workspace_id: String },

    #[route("/project/:workspace_id/members/:membership_id")]
    MemberDetail { workspace_id: String, membership_id: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
