use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page not-found", "data-testid": "page-not-found",
            h1 { "404" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { class: "btn", to: Route::Landing {}, "Go Home" }
        }
    }
}
