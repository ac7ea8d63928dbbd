use dioxus::prelude::*;
use pinpoint_shared::session::Session;

use crate::Route;

#[component]
pub fn EntryPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let nav = navigator();

    rsx! {
        div { class: "entry",
            h1 { "Welcome to the App" }
            button {
                class: "btn",
                onclick: move |_| {
                    session.write().restart();
                    nav.push(Route::SelectionPage {});
                },
                "Start"
            }
        }
    }
}
