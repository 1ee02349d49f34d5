use dioxus::prelude::*;
use dioxus_router::Link;
use services::ProgressError;

use crate::routes::Route;

/// Why a page could not show its data. Both causes render the same panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unavailable,
}

impl From<ProgressError> for ViewError {
    fn from(err: ProgressError) -> Self {
        tracing::warn!(error = %err, "progress read failed; showing not found");
        Self::Unavailable
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageState<T> {
    Loading,
    NotFound,
    Ready(T),
}

#[must_use]
pub fn page_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> PageState<T> {
    match resource.state().cloned() {
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => PageState::Ready(data.clone()),
            Some(Err(_)) => PageState::NotFound,
            None => PageState::Loading,
        },
        UseResourceState::Pending | UseResourceState::Paused | UseResourceState::Stopped => {
            PageState::Loading
        }
    }
}

/// Shared "nothing here" panel with a single way out.
#[component]
pub fn NotFoundPanel(
    title: &'static str,
    message: &'static str,
    back_label: &'static str,
    back_to: Route,
) -> Element {
    rsx! {
        div { class: "page not-found", "data-testid": "panel-not-found",
            h2 { "{title}" }
            p { "{message}" }
            Link { class: "btn", to: back_to, "{back_label}" }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "page loading", "data-testid": "loading",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
