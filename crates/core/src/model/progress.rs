use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, LessonId, QuizId, UserId};

/// Badge state of a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    InProgress,
    Completed,
}

impl CompletionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A user's progress through one course, as reported by the progress API.
///
/// Records are owned by the backend; this side only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCourse {
    pub user_id: UserId,
    pub course_id: CourseId,
    #[serde(default)]
    pub lessons_completed: BTreeSet<LessonId>,
    #[serde(default)]
    pub quizzes_completed: BTreeSet<QuizId>,
    #[serde(default)]
    pub progress_percentage: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl UserCourse {
    /// A fresh record with nothing completed.
    pub fn new(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            user_id,
            course_id,
            lessons_completed: BTreeSet::new(),
            quizzes_completed: BTreeSet::new(),
            progress_percentage: 0,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn with_lessons<I, S>(mut self, lessons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LessonId>,
    {
        self.lessons_completed = lessons.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_quizzes<I, S>(mut self, quizzes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<QuizId>,
    {
        self.quizzes_completed = quizzes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_progress(mut self, percentage: u32) -> Self {
        self.progress_percentage = percentage;
        self
    }

    #[must_use]
    pub fn with_completed_at(mut self, completed_at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = completed_at;
        self
    }

    /// Completion is decided by `completed_at` alone, never by the percentage.
    #[must_use]
    pub fn status(&self) -> CompletionStatus {
        if self.completed_at.is_some() {
            CompletionStatus::Completed
        } else {
            CompletionStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status() == CompletionStatus::Completed
    }

    #[must_use]
    pub fn has_completed_lesson(&self, id: &LessonId) -> bool {
        self.lessons_completed.contains(id)
    }

    #[must_use]
    pub fn has_completed_quiz(&self, id: &QuizId) -> bool {
        self.quizzes_completed.contains(id)
    }

    /// Server percentage clamped to 0..=100.
    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        // Clamped above, so the cast cannot truncate.
        self.progress_percentage.min(100) as u8
    }
}
