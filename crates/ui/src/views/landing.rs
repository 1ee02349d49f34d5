use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::SessionState;
use crate::routes::Route;

#[component]
pub fn LandingView() -> Element {
    let session = use_context::<SessionState>();
    let signed_in = session.user().is_some();

    rsx! {
        div { class: "page landing",
            section { class: "hero",
                h1 { "Welcome to the SHARE Gateway" }
                p { class: "muted",
                    "Onboarding and training for SHARE Mobile Clinic staff. Work through your assigned courses, read the lessons, and check what you learned with short quizzes."
                }
                div { class: "hero-actions",
                    if signed_in {
                        Link { class: "btn", to: Route::Dashboard {}, "Go to Dashboard" }
                    } else {
                        Link { class: "btn", to: Route::Login {}, "Sign In" }
                        Link { class: "btn btn-ghost", to: Route::Register {}, "Create Account" }
                    }
                }
            }
        }
    }
}
