use gateway_core::model::{Course, LessonId};

use crate::vm::markdown_vm::markdown_to_html;

/// Link to a neighbouring lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonLinkVm {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub course_id: String,
    pub course_title: String,
    pub title: String,
    /// "Lesson N of M", 1-based.
    pub position_label: String,
    /// Sanitized HTML; safe for `dangerous_inner_html`.
    pub content_html: String,
    pub previous: Option<LessonLinkVm>,
    pub next: Option<LessonLinkVm>,
}

#[must_use]
pub fn map_lesson_detail(course: &Course, lesson_id: &LessonId) -> Option<LessonDetailVm> {
    let index = course.lesson_position(lesson_id)?;
    let lessons = course.lessons();
    let lesson = &lessons[index];

    let link = |i: usize| {
        lessons.get(i).map(|lesson| LessonLinkVm {
            id: lesson.id.to_string(),
            title: lesson.title.clone(),
        })
    };

    Some(LessonDetailVm {
        course_id: course.id().to_string(),
        course_title: course.title().to_owned(),
        title: lesson.title.clone(),
        position_label: format!("Lesson {} of {}", index + 1, lessons.len()),
        content_html: markdown_to_html(&lesson.content),
        previous: index.checked_sub(1).and_then(link),
        next: link(index + 1),
    })
}
