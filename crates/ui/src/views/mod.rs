mod auth_forms;
mod course;
mod dashboard;
mod landing;
mod lesson;
mod not_found;
mod quiz;
mod state;

pub use auth_forms::{LoginView, RegisterView};
pub use course::CourseView;
pub use dashboard::DashboardView;
pub use landing::LandingView;
pub use lesson::LessonView;
pub use not_found::NotFoundView;
pub use quiz::QuizView;
pub use state::{LoadingIndicator, NotFoundPanel, PageState, ViewError, page_state_from_resource};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod view_smoke;
