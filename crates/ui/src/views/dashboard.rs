use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, SessionState};
use crate::routes::Route;
use crate::views::{LoadingIndicator, PageState, ViewError, page_state_from_resource};
use crate::vm::{DashboardCardVm, DashboardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionState>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let progress = progress.clone();
        let user_id = session.user_id();

        async move {
            // A failed read shows the same empty state as "nothing assigned".
            let records = match progress.user_courses(user_id.as_ref()).await {
                Ok(fetch) => fetch.loaded().unwrap_or_default(),
                Err(err) => {
                    tracing::warn!(error = %err, "dashboard read failed; showing empty state");
                    Vec::new()
                }
            };
            Ok::<_, ViewError>(map_dashboard(catalog.as_ref(), &records))
        }
    });

    let state = page_state_from_resource(resource);
    let greeting = session
        .user()
        .map(|user| format!("Welcome back, {}", user.greeting_name()));

    rsx! {
        div { class: "page dashboard",
            header { class: "page-header",
                h1 { "My Dashboard" }
                if let Some(greeting) = greeting {
                    p { class: "muted", "{greeting}" }
                }
            }

            match state {
                PageState::Loading => rsx! { LoadingIndicator {} },
                PageState::NotFound => rsx! { EmptyState {} },
                PageState::Ready(vm) => rsx! { DashboardGrid { vm } },
            }
        }
    }
}

#[component]
fn DashboardGrid(vm: DashboardVm) -> Element {
    if !vm.has_assignments {
        return rsx! { EmptyState {} };
    }

    rsx! {
        div { class: "course-grid", "data-testid": "course-grid",
            for card in vm.cards {
                CourseCard { key: "{card.course_id}", card: card.clone() }
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state", "data-testid": "empty-state",
            h2 { "No Courses Assigned Yet" }
            p { "Your administrator will assign onboarding courses to you soon." }
        }
    }
}

#[component]
fn CourseCard(card: DashboardCardVm) -> Element {
    let (badge_id, badge_class) = if card.is_completed() {
        (format!("badge-completed-{}", card.course_id), "badge badge-completed")
    } else {
        (format!("badge-progress-{}", card.course_id), "badge badge-progress")
    };
    let card_id = format!("card-course-{}", card.course_id);
    let lessons = card.lessons.label();
    let quizzes = card.quizzes.label();
    let status = card.status_label();

    rsx! {
        Link {
            class: "course-card",
            to: Route::Course { course_id: card.course_id.clone() },
            div { "data-testid": "{card_id}",
                div { class: "course-card-header",
                    h3 { "{card.title}" }
                    span { class: "{badge_class}", "data-testid": "{badge_id}", "{status}" }
                }
                p { class: "muted", "{card.description}" }
                div { class: "progress-row",
                    span { "Progress" }
                    span { "{card.progress}%" }
                }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {card.progress}%" }
                }
                div { class: "item-counts",
                    span { "Lessons {lessons}" }
                    span { "Quizzes {quizzes}" }
                }
            }
        }
    }
}
