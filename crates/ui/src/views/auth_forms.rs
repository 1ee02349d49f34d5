use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::NewAccount;

use crate::context::{AppContext, SessionState};
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = ctx.auth();
        spawn(async move {
            pending.set(true);
            let result = auth.sign_in(&email.cloned(), &password.cloned()).await;
            pending.set(false);
            match result {
                Ok(user) => {
                    error.set(None);
                    session.set_user(Some(user));
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page auth",
            form { class: "card auth-card", onsubmit: submit,
                h1 { "Sign In" }
                FormError { message: error.cloned() }
                TextField { label: "Email", kind: "email", testid: "input-email", value: email }
                TextField { label: "Password", kind: "password", testid: "input-password", value: password }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: pending(),
                    "data-testid": "button-login",
                    if pending() { "Signing in..." } else { "Sign In" }
                }
                p { class: "muted",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let display_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = ctx.auth();
        let account = NewAccount {
            display_name: display_name.cloned(),
            email: email.cloned(),
            password: password.cloned(),
        };
        spawn(async move {
            pending.set(true);
            let result = auth.register(account).await;
            pending.set(false);
            match result {
                Ok(user) => {
                    error.set(None);
                    session.set_user(Some(user));
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page auth",
            form { class: "card auth-card", onsubmit: submit,
                h1 { "Create Account" }
                FormError { message: error.cloned() }
                TextField { label: "Full name", kind: "text", testid: "input-name", value: display_name }
                TextField { label: "Email", kind: "email", testid: "input-email", value: email }
                TextField { label: "Password", kind: "password", testid: "input-password", value: password }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: pending(),
                    "data-testid": "button-register",
                    if pending() { "Creating account..." } else { "Create Account" }
                }
                p { class: "muted",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    kind: &'static str,
    testid: &'static str,
    value: Signal<String>,
) -> Element {
    let mut value = value;

    rsx! {
        label { class: "field",
            span { "{label}" }
            input {
                r#type: kind,
                value: "{value}",
                "data-testid": testid,
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

#[component]
fn FormError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "form-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
