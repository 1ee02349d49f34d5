mod course;
mod grading;
mod ids;
mod progress;
mod user;

pub use ids::{CourseId, LessonId, ParseIdError, QuizId, UserId};

pub use course::{Course, CourseError, Lesson, Question, Quiz};
pub use grading::{QuestionOutcome, QuizScore};
pub use progress::{CompletionStatus, UserCourse};
pub use user::AuthUser;
