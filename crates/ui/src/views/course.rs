use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use gateway_core::model::{Course, CourseId, UserId};
use services::ProgressService;

use crate::context::{AppContext, SessionState};
use crate::routes::Route;
use crate::views::{LoadingIndicator, NotFoundPanel, PageState, ViewError, page_state_from_resource};
use crate::vm::{CourseDetailVm, CourseItemVm, map_course_detail};

async fn load_course(
    progress: Arc<ProgressService>,
    course: Option<Arc<Course>>,
    user_id: Option<UserId>,
) -> Result<CourseDetailVm, ViewError> {
    // Unknown course: nothing worth fetching.
    let course = course.ok_or(ViewError::NotFound)?;
    let record = progress
        .user_course(user_id.as_ref(), Some(course.id()))
        .await?
        .loaded()
        .flatten();
    map_course_detail(Some(&course), record.as_ref()).ok_or(ViewError::NotFound)
}

#[component]
pub fn CourseView(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionState>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();

    let resource = use_resource(use_reactive!(|(course_id,)| {
        let course = catalog.get_course(&CourseId::new(course_id));
        load_course(progress.clone(), course, session.user_id())
    }));

    match page_state_from_resource(resource) {
        PageState::Loading => rsx! { LoadingIndicator {} },
        PageState::NotFound => rsx! {
            NotFoundPanel {
                title: "Course Not Found",
                message: "This course doesn't exist or hasn't been assigned to you.",
                back_label: "Back to Dashboard",
                back_to: Route::Dashboard {},
            }
        },
        PageState::Ready(course) => rsx! { CourseDetails { course } },
    }
}

#[component]
fn CourseDetails(course: CourseDetailVm) -> Element {
    let lessons_label = course.lesson_count.label();
    let quizzes_label = course.quiz_count.label();

    rsx! {
        div { class: "page course",
            Link { class: "back-link", to: Route::Dashboard {}, "← Back to Dashboard" }

            header { class: "page-header",
                div { class: "course-title-row",
                    h1 { "{course.title}" }
                    if let Some(date) = course.completed_on.clone() {
                        span {
                            class: "badge badge-completed",
                            "data-testid": "badge-course-completed",
                            "Completed {date}"
                        }
                    }
                }
                p { class: "muted", "{course.description}" }
            }

            section { class: "card",
                div { class: "progress-row",
                    span { "Overall Progress" }
                    span { "data-testid": "text-course-progress", "{course.progress}%" }
                }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {course.progress}%" }
                }
                div { class: "item-counts",
                    span { "data-testid": "text-lesson-count", "Lessons {lessons_label}" }
                    span { "data-testid": "text-quiz-count", "Quizzes {quizzes_label}" }
                }
            }

            section { class: "card",
                h2 { "Lessons" }
                ul { class: "item-list",
                    for item in course.lessons.clone() {
                        CourseItem {
                            key: "lesson-{item.id}",
                            kind: "lesson",
                            to: Route::Lesson {
                                course_id: course.course_id.clone(),
                                lesson_id: item.id.clone(),
                            },
                            item: item.clone(),
                        }
                    }
                }
            }

            if !course.quizzes.is_empty() {
                section { class: "card",
                    h2 { "Quizzes" }
                    ul { class: "item-list",
                        for item in course.quizzes.clone() {
                            CourseItem {
                                key: "quiz-{item.id}",
                                kind: "quiz",
                                to: Route::Quiz {
                                    course_id: course.course_id.clone(),
                                    quiz_id: item.id.clone(),
                                },
                                item: item.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseItem(kind: &'static str, item: CourseItemVm, to: Route) -> Element {
    let row_class = if item.completed { "item item-completed" } else { "item" };

    rsx! {
        li { class: "{row_class}", "data-testid": "item-{kind}-{item.id}",
            Link { to,
                span { class: "item-number", "{item.number_label}" }
                span { class: "item-title", "{item.title}" }
                if let Some(subtitle) = item.subtitle.clone() {
                    span { class: "item-subtitle muted", "{subtitle}" }
                }
                if item.completed {
                    span {
                        class: "badge badge-completed",
                        "data-testid": "badge-{kind}-completed-{item.id}",
                        "Completed"
                    }
                }
            }
        }
    }
}
