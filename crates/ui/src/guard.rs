use dioxus::prelude::*;
use dioxus_router::use_navigator;
use gateway_core::model::AuthUser;

use crate::context::SessionState;
use crate::routes::Route;

/// Decision for an authenticated-only route.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteGuard {
    Allow(AuthUser),
    Redirect(Route),
}

/// Signed-in users pass; everyone else is sent to the login page.
#[must_use]
pub fn guard_route(user: Option<AuthUser>) -> RouteGuard {
    match user {
        Some(user) => RouteGuard::Allow(user),
        None => RouteGuard::Redirect(Route::Login {}),
    }
}

/// Renders `children` only for a signed-in user and redirects otherwise.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_context::<SessionState>();
    let navigator = use_navigator();

    // Re-runs whenever the session signal changes, e.g. after sign-out.
    use_effect(move || {
        if let RouteGuard::Redirect(target) = guard_route(session.user()) {
            navigator.replace(target);
        }
    });

    match guard_route(session.user()) {
        RouteGuard::Allow(_) => children,
        RouteGuard::Redirect(_) => rsx! {
            div { class: "page redirecting", "data-testid": "redirect-login" }
        },
    }
}
