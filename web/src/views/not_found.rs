use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "notfound-page",
            h1 { class: "notfound-title", "404" }
            p { class: "notfound-desc", "There is no page at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to the dashboard" }
        }
    }
}
