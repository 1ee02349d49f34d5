use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::{AppContext, SessionState};
use crate::guard::RequireAuth;
use crate::views::{
    CourseView, DashboardView, LandingView, LessonView, LoginView, NotFoundView, QuizView,
    RegisterView,
};
use crate::vm::{NavAction, nav_items};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/dashboard", DashboardPage)] Dashboard {},
        #[route("/course/:course_id", CoursePage)] Course { course_id: String },
        #[route("/course/:course_id/lesson/:lesson_id", LessonPage)]
        Lesson { course_id: String, lesson_id: String },
        #[route("/course/:course_id/quiz/:quiz_id", QuizPage)]
        Quiz { course_id: String, quiz_id: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn DashboardPage() -> Element {
    rsx! {
        RequireAuth { DashboardView {} }
    }
}

#[component]
fn CoursePage(course_id: String) -> Element {
    rsx! {
        RequireAuth { CourseView { course_id } }
    }
}

#[component]
fn LessonPage(course_id: String, lesson_id: String) -> Element {
    rsx! {
        RequireAuth { LessonView { course_id, lesson_id } }
    }
}

#[component]
fn QuizPage(course_id: String, quiz_id: String) -> Element {
    rsx! {
        RequireAuth { QuizView { course_id, quiz_id } }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionState>();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let signed_in = session.user().is_some();
    let brand_target = if signed_in {
        Route::Dashboard {}
    } else {
        Route::Landing {}
    };
    let items = nav_items(signed_in, &route.to_string());

    let sign_out = move |_: MouseEvent| {
        let auth = ctx.auth();
        let progress = ctx.progress();
        let mut session = session;
        spawn(async move {
            let previous = session.user_id();
            if let Err(err) = auth.sign_out().await {
                tracing::warn!(error = %err, "sign-out failed");
            }
            if let Some(user_id) = previous {
                progress.invalidate_user(&user_id);
            }
            session.set_user(None);
            navigator.push(Route::Landing {});
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: brand_target, "SHARE Gateway" }
            ul {
                for item in items {
                    li { key: "{item.label}",
                        match item.action.clone() {
                            NavAction::SignOut => rsx! {
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    "data-testid": "button-signout",
                                    onclick: sign_out.clone(),
                                    "{item.label}"
                                }
                            },
                            NavAction::Go(path) => rsx! {
                                Link {
                                    class: item.css_class(),
                                    to: path,
                                    "{item.label}"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
