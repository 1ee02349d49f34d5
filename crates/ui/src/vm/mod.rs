mod course_vm;
mod dashboard_vm;
mod lesson_vm;
mod markdown_vm;
mod nav_vm;
mod quiz_vm;
mod time_fmt;

pub use course_vm::{CourseDetailVm, CourseItemVm, map_course_detail};
pub use dashboard_vm::{
    DashboardCardVm, DashboardVm, ItemCountVm, count_items, count_recorded, map_dashboard,
};
pub use lesson_vm::{LessonDetailVm, LessonLinkVm, map_lesson_detail};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use nav_vm::{NavAction, NavItemVm, nav_items};
pub use quiz_vm::{
    ChoiceVm, QuestionVm, QuizAttempt, QuizDetailVm, ScoreVm, map_quiz_detail, quiz_attempt_key,
};
pub use time_fmt::format_date;
