use gateway_core::model::{Course, UserCourse};

use crate::vm::dashboard_vm::{ItemCountVm, count_items};
use crate::vm::time_fmt::format_date;

/// One row in the course's lesson or quiz list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseItemVm {
    pub id: String,
    /// "1", "2", ... for lessons; "Q1", "Q2", ... for quizzes.
    pub number_label: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub completed_on: Option<String>,
    pub progress: u8,
    pub lesson_count: ItemCountVm,
    pub quiz_count: ItemCountVm,
    pub lessons: Vec<CourseItemVm>,
    pub quizzes: Vec<CourseItemVm>,
}

impl CourseDetailVm {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_on.is_some()
    }
}

/// Merge a catalog course with the user's record for it.
///
/// Either half missing yields `None`; callers show a single not-found state
/// for both causes.
#[must_use]
pub fn map_course_detail(
    course: Option<&Course>,
    record: Option<&UserCourse>,
) -> Option<CourseDetailVm> {
    let (course, record) = (course?, record?);
    let (lesson_count, quiz_count) = count_items(course, record);

    let lessons = course
        .lessons()
        .iter()
        .enumerate()
        .map(|(index, lesson)| CourseItemVm {
            id: lesson.id.to_string(),
            number_label: (index + 1).to_string(),
            title: lesson.title.clone(),
            subtitle: None,
            completed: record.has_completed_lesson(&lesson.id),
        })
        .collect();

    let quizzes = course
        .quizzes()
        .iter()
        .enumerate()
        .map(|(index, quiz)| CourseItemVm {
            id: quiz.id.to_string(),
            number_label: format!("Q{}", index + 1),
            title: quiz.title.clone(),
            subtitle: Some(question_count_label(quiz.questions.len())),
            completed: record.has_completed_quiz(&quiz.id),
        })
        .collect();

    Some(CourseDetailVm {
        course_id: course.id().to_string(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        completed_on: record.completed_at.map(format_date),
        progress: record.progress_percentage(),
        lesson_count,
        quiz_count,
        lessons,
        quizzes,
    })
}

fn question_count_label(count: usize) -> String {
    if count == 1 {
        "1 question".to_owned()
    } else {
        format!("{count} questions")
    }
}
