use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, LessonId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Structural problems found by [`Course::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("lesson id {0} appears more than once")]
    DuplicateLesson(LessonId),

    #[error("quiz id {0} appears more than once")]
    DuplicateQuiz(QuizId),

    #[error("quiz {quiz} question {question} has no choices")]
    NoChoices { quiz: QuizId, question: usize },

    #[error("quiz {quiz} question {question} marks choice {answer} correct but has {choices} choices")]
    AnswerOutOfRange {
        quiz: QuizId,
        question: usize,
        answer: usize,
        choices: usize,
    },
}

//
// ─── CONTENT TYPES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    /// Markdown body.
    pub content: String,
}

impl Lesson {
    pub fn new(id: impl Into<LessonId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    /// Zero-based index into `choices`.
    pub correct_answer: usize,
}

impl Question {
    pub fn new<I, S>(question: impl Into<String>, choices: I, correct_answer: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_answer,
        }
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer && choice < self.choices.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: impl Into<QuizId>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions,
        }
    }
}

/// A catalog entry: ordered lessons followed by ordered quizzes.
///
/// Construction does not check invariants; catalog content is fixed at build
/// time and checked by [`Course::validate`] in tests and the `catalog` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    lessons: Vec<Lesson>,
    quizzes: Vec<Quiz>,
}

impl Course {
    pub fn new(
        id: impl Into<CourseId>,
        title: impl Into<String>,
        description: impl Into<String>,
        lessons: Vec<Lesson>,
        quizzes: Vec<Quiz>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            lessons,
            quizzes,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lessons in canonical reading order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == id)
    }

    /// Zero-based position of a lesson in reading order.
    #[must_use]
    pub fn lesson_position(&self, id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| &lesson.id == id)
    }

    #[must_use]
    pub fn quiz(&self, id: &QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| &quiz.id == id)
    }

    #[must_use]
    pub fn quiz_position(&self, id: &QuizId) -> Option<usize> {
        self.quizzes.iter().position(|quiz| &quiz.id == id)
    }

    /// Lessons plus quizzes.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lessons.len() + self.quizzes.len()
    }

    /// Collects every structural problem in the course.
    ///
    /// An empty result means the course is well formed.
    #[must_use]
    pub fn validate(&self) -> Vec<CourseError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(CourseError::EmptyTitle);
        }

        let mut seen_lessons = HashSet::new();
        for lesson in &self.lessons {
            if !seen_lessons.insert(&lesson.id) {
                errors.push(CourseError::DuplicateLesson(lesson.id.clone()));
            }
        }

        let mut seen_quizzes = HashSet::new();
        for quiz in &self.quizzes {
            if !seen_quizzes.insert(&quiz.id) {
                errors.push(CourseError::DuplicateQuiz(quiz.id.clone()));
            }

            for (index, question) in quiz.questions.iter().enumerate() {
                if question.choices.is_empty() {
                    errors.push(CourseError::NoChoices {
                        quiz: quiz.id.clone(),
                        question: index + 1,
                    });
                } else if question.correct_answer >= question.choices.len() {
                    errors.push(CourseError::AnswerOutOfRange {
                        quiz: quiz.id.clone(),
                        question: index + 1,
                        answer: question.correct_answer,
                        choices: question.choices.len(),
                    });
                }
            }
        }

        errors
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
