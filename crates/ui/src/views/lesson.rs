use dioxus::prelude::*;
use dioxus_router::Link;
use gateway_core::model::{CourseId, LessonId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::NotFoundPanel;
use crate::vm::{LessonDetailVm, map_lesson_detail};

#[component]
pub fn LessonView(course_id: String, lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.catalog().get_course(&CourseId::new(course_id.as_str()));

    let Some(course) = course else {
        return rsx! {
            NotFoundPanel {
                title: "Lesson Not Found",
                message: "This course doesn't exist.",
                back_label: "Back to Dashboard",
                back_to: Route::Dashboard {},
            }
        };
    };

    match map_lesson_detail(&course, &LessonId::new(lesson_id)) {
        Some(lesson) => rsx! { LessonDetails { lesson } },
        None => rsx! {
            NotFoundPanel {
                title: "Lesson Not Found",
                message: "This lesson isn't part of the course.",
                back_label: "Back to Course",
                back_to: Route::Course { course_id },
            }
        },
    }
}

#[component]
fn LessonDetails(lesson: LessonDetailVm) -> Element {
    let course_id = lesson.course_id.clone();

    rsx! {
        div { class: "page lesson",
            Link {
                class: "back-link",
                to: Route::Course { course_id: course_id.clone() },
                "← Back to {lesson.course_title}"
            }

            header { class: "page-header",
                p { class: "muted", "data-testid": "text-lesson-position", "{lesson.position_label}" }
                h1 { "{lesson.title}" }
            }

            article {
                class: "card lesson-content",
                "data-testid": "lesson-content",
                dangerous_inner_html: "{lesson.content_html}",
            }

            nav { class: "lesson-nav",
                if let Some(previous) = lesson.previous.clone() {
                    Link {
                        class: "btn btn-ghost",
                        to: Route::Lesson {
                            course_id: course_id.clone(),
                            lesson_id: previous.id.clone(),
                        },
                        "← {previous.title}"
                    }
                }
                if let Some(next) = lesson.next.clone() {
                    Link {
                        class: "btn",
                        to: Route::Lesson {
                            course_id: course_id.clone(),
                            lesson_id: next.id.clone(),
                        },
                        "{next.title} →"
                    }
                } else {
                    Link {
                        class: "btn",
                        to: Route::Course { course_id: course_id.clone() },
                        "Finish"
                    }
                }
            }
        }
    }
}
