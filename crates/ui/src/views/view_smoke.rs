use std::sync::Arc;

use gateway_core::model::{CourseId, UserCourse, UserId};
use gateway_core::time::fixed_now;
use storage::{ProgressRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo, staff_user};

fn record(course: &str) -> UserCourse {
    UserCourse::new(staff_user().id, CourseId::new(course))
}

fn orientation() -> ViewKind {
    ViewKind::Course("orientation_common".to_string())
}

struct FailingRepo;

#[async_trait::async_trait]
impl ProgressRepository for FailingRepo {
    async fn list_user_courses(&self, _user_id: &UserId) -> Result<Vec<UserCourse>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_user_course(
        &self,
        _user_id: &UserId,
        _course_id: &CourseId,
    ) -> Result<Option<UserCourse>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

/// Never answers, so pages stay in their loading state.
struct PendingRepo;

#[async_trait::async_trait]
impl ProgressRepository for PendingRepo {
    async fn list_user_courses(&self, _user_id: &UserId) -> Result<Vec<UserCourse>, StorageError> {
        std::future::pending().await
    }

    async fn get_user_course(
        &self,
        _user_id: &UserId,
        _course_id: &CourseId,
    ) -> Result<Option<UserCourse>, StorageError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_course_cards() {
    let records = vec![
        record("orientation_common")
            .with_lessons(["l1", "l2", "l3"])
            .with_quizzes(["q1"])
            .with_progress(100)
            .with_completed_at(Some(fixed_now())),
    ];
    let mut harness = setup_view_harness(ViewKind::Dashboard, records);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("My Dashboard"), "missing title in {html}");
    assert!(html.contains("SHARE Staff Orientation"), "missing course in {html}");
    assert!(html.contains("badge-completed-orientation_common"), "missing badge in {html}");
    assert!(html.contains("Lessons 3 / 3"), "missing lesson count in {html}");
    assert!(html.contains("Quizzes 1 / 1"), "missing quiz count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_full_percentage_without_timestamp_is_in_progress() {
    let records = vec![record("orientation_common").with_progress(100)];
    let mut harness = setup_view_harness(ViewKind::Dashboard, records);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("badge-progress-orientation_common"), "missing badge in {html}");
    assert!(html.contains("In Progress"), "missing label in {html}");
    assert!(!html.contains("badge-completed-orientation_common"), "unexpected badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_records_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Vec::new());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No Courses Assigned Yet"), "missing empty state in {html}");
    assert!(!html.contains("Loading..."), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_omits_orphaned_records() {
    let records = vec![record("deleted_course").with_progress(50)];
    let mut harness = setup_view_harness(ViewKind::Dashboard, records);
    harness.settle().await;
    let html = harness.render();

    assert!(!html.contains("deleted_course"), "orphan rendered in {html}");
    assert!(html.contains("course-grid"), "missing grid in {html}");
    assert!(!html.contains("No Courses Assigned Yet"), "unexpected empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_loading_while_fetch_is_pending() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Dashboard, Arc::new(PendingRepo), Some(staff_user()));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Loading..."), "missing loading indicator in {html}");
    assert!(!html.contains("No Courses Assigned Yet"), "resolved too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_transport_failure_renders_empty_state() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Dashboard, Arc::new(FailingRepo), Some(staff_user()));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No Courses Assigned Yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_visitor_never_sees_the_dashboard() {
    let records = vec![record("orientation_common")];
    let repo = storage::InMemoryProgressRepository::new();
    for record in records {
        repo.insert(record).expect("seed progress");
    }
    let mut harness =
        setup_view_harness_with_repo(ViewKind::GuardedDashboard, Arc::new(repo), None);
    harness.settle().await;
    let html = harness.render();

    assert!(!html.contains("My Dashboard"), "dashboard rendered in {html}");
    assert!(!html.contains("SHARE Staff Orientation"), "course leaked in {html}");
    assert!(
        html.contains("redirect-login") || html.contains("navigated:/login"),
        "no redirect in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn course_unknown_id_renders_not_found_panel() {
    let mut harness = setup_view_harness(
        ViewKind::Course("no_such_course".to_string()),
        vec![record("orientation_common")],
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course Not Found"), "missing panel in {html}");
    assert!(html.contains("Back to Dashboard"), "missing recovery action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_without_record_renders_not_found_panel() {
    let mut harness = setup_view_harness(orientation(), Vec::new());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course Not Found"), "missing panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_transport_failure_renders_not_found_panel() {
    let mut harness =
        setup_view_harness_with_repo(orientation(), Arc::new(FailingRepo), Some(staff_user()));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course Not Found"), "missing panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_partial_progress_scenario() {
    let records = vec![record("orientation_common").with_lessons(["l1"]).with_progress(25)];
    let mut harness = setup_view_harness(orientation(), records);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Lessons 1 / 3"), "missing lesson count in {html}");
    assert!(html.contains("Quizzes 0 / 1"), "missing quiz count in {html}");
    assert!(html.contains("width: 25%"), "missing progress bar in {html}");
    assert!(html.contains("badge-lesson-completed-l1"), "l1 not tagged in {html}");
    assert!(!html.contains("badge-lesson-completed-l2"), "l2 tagged in {html}");
    assert!(!html.contains("badge-lesson-completed-l3"), "l3 tagged in {html}");
    assert!(!html.contains("badge-quiz-completed-q1"), "q1 tagged in {html}");
    assert!(!html.contains("badge-course-completed"), "course badge in {html}");
    assert!(html.contains("5 questions"), "missing question count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_tags_only_the_completed_lesson() {
    let records = vec![record("orientation_common").with_lessons(["l2"])];
    let mut harness = setup_view_harness(orientation(), records);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("badge-lesson-completed-l2"), "l2 not tagged in {html}");
    assert!(!html.contains("badge-lesson-completed-l1"), "l1 tagged in {html}");
    assert!(!html.contains("badge-lesson-completed-l3"), "l3 tagged in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_completed_scenario() {
    let records = vec![
        record("orientation_common")
            .with_lessons(["l1", "l2", "l3"])
            .with_quizzes(["q1"])
            .with_progress(100)
            .with_completed_at(Some(fixed_now())),
    ];
    let mut harness = setup_view_harness(orientation(), records);
    harness.settle().await;
    let html = harness.render();

    for id in ["lesson-completed-l1", "lesson-completed-l2", "lesson-completed-l3", "quiz-completed-q1"] {
        assert!(html.contains(&format!("badge-{id}")), "missing badge-{id} in {html}");
    }
    assert!(html.contains("badge-course-completed"), "missing course badge in {html}");
    assert!(html.contains("November 14, 2023"), "missing completion date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_renders_position_and_content() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson("orientation_common".to_string(), "l2".to_string()),
        Vec::new(),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Lesson 2 of 3"), "missing position in {html}");
    assert!(html.contains("<h1>"), "markdown not rendered in {html}");
    assert!(html.contains("Welcome to SHARE"), "missing previous link in {html}");
    assert!(html.contains("Working in Haiti"), "missing next link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_unknown_id_renders_not_found_panel() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson("orientation_common".to_string(), "l42".to_string()),
        Vec::new(),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Lesson Not Found"), "missing panel in {html}");
    assert!(html.contains("Back to Course"), "missing recovery action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_questions() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("orientation_common".to_string(), "q1".to_string()),
        Vec::new(),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Orientation Quiz"), "missing title in {html}");
    assert!(html.contains("question-4"), "missing last question in {html}");
    assert!(html.contains("Submit Answers"), "missing submit in {html}");
    assert!(!html.contains("text-quiz-score"), "graded before submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_unknown_id_renders_not_found_panel() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("orientation_common".to_string(), "q9".to_string()),
        Vec::new(),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Quiz Not Found"), "missing panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_signed_in_links_to_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Landing, Vec::new());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Go to Dashboard"), "missing dashboard link in {html}");
    assert!(!html.contains("Create Account"), "unexpected register link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_signed_out_offers_sign_in() {
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Landing,
        Arc::new(storage::InMemoryProgressRepository::new()),
        None,
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Sign In"), "missing sign-in link in {html}");
    assert!(html.contains("Create Account"), "missing register link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_form_renders_fields_without_error() {
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Login,
        Arc::new(storage::InMemoryProgressRepository::new()),
        None,
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("input-email"), "missing email field in {html}");
    assert!(html.contains("input-password"), "missing password field in {html}");
    assert!(html.contains("button-login"), "missing submit button in {html}");
    assert!(!html.contains("form-error"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_form_renders_name_field() {
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Register,
        Arc::new(storage::InMemoryProgressRepository::new()),
        None,
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("input-name"), "missing name field in {html}");
    assert!(html.contains("button-register"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cached_dashboard_read_survives_repository_changes() {
    let repo = Arc::new(storage::InMemoryProgressRepository::new());
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Dashboard, repo.clone(), Some(staff_user()));
    harness.settle().await;
    assert!(harness.render().contains("No Courses Assigned Yet"));

    repo.insert(record("orientation_common")).expect("seed progress");
    let cached = harness
        .progress
        .user_courses(Some(&staff_user().id))
        .await
        .expect("cached read")
        .loaded()
        .expect("user present");
    assert!(cached.is_empty(), "cache was bypassed");

    harness.progress.invalidate_user(&staff_user().id);
    let fresh = harness
        .progress
        .user_courses(Some(&staff_user().id))
        .await
        .expect("fresh read")
        .loaded()
        .expect("user present");
    assert_eq!(fresh.len(), 1);
}
