use gateway_core::model::{Course, QuestionOutcome, QuizId};

/// Answers picked so far for one quiz visit.
///
/// `key` identifies the quiz the picks belong to, so a stale attempt is
/// discarded when the route switches to another quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizAttempt {
    key: String,
    picks: Vec<Option<usize>>,
    submitted: bool,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(key: impl Into<String>, question_count: usize) -> Self {
        Self {
            key: key.into(),
            picks: vec![None; question_count],
            submitted: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// This attempt if it belongs to `key`, otherwise a fresh one.
    #[must_use]
    pub fn synced(&self, key: &str, question_count: usize) -> Self {
        if self.key == key && self.picks.len() == question_count {
            self.clone()
        } else {
            Self::new(key, question_count)
        }
    }

    #[must_use]
    pub fn picks(&self) -> &[Option<usize>] {
        &self.picks
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.picks.iter().all(Option::is_some)
    }

    /// Ignored once submitted or when `question` is out of range.
    pub fn pick(&mut self, question: usize, choice: usize) {
        if self.submitted {
            return;
        }
        if let Some(slot) = self.picks.get_mut(question) {
            *slot = Some(choice);
        }
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn reset(&mut self) {
        self.picks.iter_mut().for_each(|slot| *slot = None);
        self.submitted = false;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    /// Set after submission on the right answer.
    pub is_answer: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub outcome: Option<QuestionOutcome>,
}

impl QuestionVm {
    #[must_use]
    pub fn outcome_label(&self) -> Option<&'static str> {
        self.outcome.map(|outcome| match outcome {
            QuestionOutcome::Correct => "Correct",
            QuestionOutcome::Incorrect => "Incorrect",
            QuestionOutcome::Unanswered => "Unanswered",
        })
    }

    #[must_use]
    pub fn outcome_class(&self) -> &'static str {
        match self.outcome {
            Some(QuestionOutcome::Correct) => "question correct",
            Some(_) => "question incorrect",
            None => "question",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
}

impl ScoreVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {} correct ({}%)", self.correct, self.total, self.percentage)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDetailVm {
    pub course_id: String,
    pub course_title: String,
    pub quiz_id: String,
    pub title: String,
    pub questions: Vec<QuestionVm>,
    pub score: Option<ScoreVm>,
}

/// Key used to pair a `QuizAttempt` with its quiz.
#[must_use]
pub fn quiz_attempt_key(course_id: &str, quiz_id: &str) -> String {
    format!("{course_id}/{quiz_id}")
}

/// Build the quiz page from the catalog and the current attempt.
///
/// The attempt is graded only once submitted; grading is local and never
/// recorded anywhere.
#[must_use]
pub fn map_quiz_detail(
    course: &Course,
    quiz_id: &QuizId,
    attempt: &QuizAttempt,
) -> Option<QuizDetailVm> {
    let quiz = course.quiz(quiz_id)?;
    let score = attempt.is_submitted().then(|| quiz.grade(attempt.picks()));

    let questions = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let picked = attempt.picks().get(index).copied().flatten();
            QuestionVm {
                index,
                prompt: question.question.clone(),
                choices: question
                    .choices
                    .iter()
                    .enumerate()
                    .map(|(choice, label)| ChoiceVm {
                        index: choice,
                        label: label.clone(),
                        selected: picked == Some(choice),
                        is_answer: score.is_some() && question.is_correct(choice),
                    })
                    .collect(),
                outcome: score
                    .as_ref()
                    .and_then(|score| score.outcomes().get(index).copied()),
            }
        })
        .collect();

    Some(QuizDetailVm {
        course_id: course.id().to_string(),
        course_title: course.title().to_owned(),
        quiz_id: quiz.id.to_string(),
        title: quiz.title.clone(),
        questions,
        score: score.map(|score| ScoreVm {
            correct: score.correct(),
            total: score.total(),
            percentage: score.percentage(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_core::model::CourseId;
    use storage::{CourseCatalog, StaticCatalog};

    fn orientation() -> std::sync::Arc<Course> {
        StaticCatalog::builtin()
            .get_course(&CourseId::new("orientation_common"))
            .unwrap()
    }

    #[test]
    fn unsubmitted_attempt_shows_no_outcomes() {
        let course = orientation();
        let mut attempt = QuizAttempt::new("orientation_common/q1", 5);
        attempt.pick(0, 1);

        let vm = map_quiz_detail(&course, &QuizId::new("q1"), &attempt).unwrap();
        assert_eq!(vm.questions.len(), 5);
        assert!(vm.score.is_none());
        assert!(vm.questions[0].choices[1].selected);
        assert!(vm.questions.iter().all(|q| q.outcome.is_none()));
        assert!(vm.questions[0].choices.iter().all(|c| !c.is_answer));
    }

    #[test]
    fn submitted_attempt_is_graded() {
        let course = orientation();
        let mut attempt = QuizAttempt::new("orientation_common/q1", 5);
        for (question, choice) in [(0, 1), (1, 1), (2, 2), (3, 0)] {
            attempt.pick(question, choice);
        }
        attempt.submit();

        let vm = map_quiz_detail(&course, &QuizId::new("q1"), &attempt).unwrap();
        let score = vm.score.unwrap();
        assert_eq!((score.correct, score.total), (3, 5));
        assert_eq!(score.label(), "3 / 5 correct (60%)");
        assert_eq!(vm.questions[3].outcome_label(), Some("Incorrect"));
        assert_eq!(vm.questions[4].outcome_label(), Some("Unanswered"));
        assert!(vm.questions[3].choices[2].is_answer);
    }

    #[test]
    fn picks_are_frozen_after_submit_and_cleared_by_reset() {
        let mut attempt = QuizAttempt::new("k", 2);
        attempt.pick(0, 1);
        attempt.submit();
        attempt.pick(1, 0);
        assert_eq!(attempt.picks(), [Some(1), None]);

        attempt.reset();
        assert!(!attempt.is_submitted());
        assert_eq!(attempt.picks(), [None, None]);
    }

    #[test]
    fn synced_discards_attempts_for_other_quizzes() {
        let mut attempt = QuizAttempt::new("c/q1", 2);
        attempt.pick(0, 0);
        assert_eq!(attempt.synced("c/q1", 2), attempt);

        let fresh = attempt.synced("c/q2", 3);
        assert_eq!(fresh.key(), "c/q2");
        assert_eq!(fresh.picks(), [None, None, None]);
    }

    #[test]
    fn out_of_range_question_is_ignored() {
        let mut attempt = QuizAttempt::new("k", 1);
        attempt.pick(4, 0);
        assert!(!attempt.all_answered());
    }

    #[test]
    fn unknown_quiz_is_none() {
        let attempt = QuizAttempt::default();
        assert!(map_quiz_detail(&orientation(), &QuizId::new("nope"), &attempt).is_none());
    }
}
