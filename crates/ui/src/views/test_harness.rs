use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use gateway_core::model::{AuthUser, UserCourse, UserId};
use gateway_core::time::fixed_now;
use services::{AppServices, AuthProvider, Clock, LocalAuthProvider, ProgressService};
use storage::{CourseCatalog, InMemoryProgressRepository, ProgressRepository, Storage};

use crate::context::{UiApp, build_app_context, use_session_provider};
use crate::guard::RequireAuth;
use crate::views::{
    CourseView, DashboardView, LandingView, LessonView, LoginView, QuizView, RegisterView,
};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<dyn CourseCatalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn auth(&self) -> Arc<dyn AuthProvider> {
        self.services.auth()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Login,
    Register,
    Dashboard,
    /// Dashboard behind the auth guard, as routed in the app.
    GuardedDashboard,
    Course(String),
    Lesson(String, String),
    Quiz(String, String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_provider(&ctx);
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::GuardedDashboard => rsx! {
            RequireAuth { DashboardView {} }
        },
        ViewKind::Course(course_id) => rsx! { CourseView { course_id } },
        ViewKind::Lesson(course_id, lesson_id) => rsx! { LessonView { course_id, lesson_id } },
        ViewKind::Quiz(course_id, quiz_id) => rsx! { QuizView { course_id, quiz_id } },
    }
}

/// Landing spot for navigations away from `/`, e.g. the login redirect.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { "data-testid": "navigated-to", "navigated:/{path}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then give resources a few turns to resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn staff_user() -> AuthUser {
    AuthUser::new(UserId::new("staff-1"), "staff@share.test", "Marie Joseph")
}

/// Harness over an in-memory repository seeded with `records`, signed in as
/// `staff_user()`.
pub fn setup_view_harness(view: ViewKind, records: Vec<UserCourse>) -> ViewHarness {
    let repo = InMemoryProgressRepository::new();
    for record in records {
        repo.insert(record).expect("seed progress");
    }
    setup_view_harness_with_repo(view, Arc::new(repo), Some(staff_user()))
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn ProgressRepository>,
    user: Option<AuthUser>,
) -> ViewHarness {
    let storage = Storage::with_progress(repo);
    let auth = match user {
        Some(user) => LocalAuthProvider::new().signed_in_as(user),
        None => LocalAuthProvider::new(),
    };
    let services = AppServices::new(&storage, Arc::new(auth), Clock::fixed(fixed_now()));
    let progress = services.progress();

    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, progress }
}
