use crate::model::course::Quiz;

/// Result of grading one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

/// Outcome of grading a full set of answers against a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScore {
    outcomes: Vec<QuestionOutcome>,
}

impl QuizScore {
    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| **outcome == QuestionOutcome::Correct)
            .count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Whole-number percentage, rounded down. An empty quiz scores 0.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.outcomes.is_empty() {
            return 0;
        }
        // correct <= total, so the quotient is at most 100.
        (self.correct() * 100 / self.total()) as u8
    }
}

impl Quiz {
    /// Grade `answers` positionally against the quiz questions.
    ///
    /// Missing entries and `None` count as unanswered; choices outside the
    /// question's range count as incorrect.
    #[must_use]
    pub fn grade(&self, answers: &[Option<usize>]) -> QuizScore {
        let outcomes = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| match answers.get(index).copied().flatten() {
                None => QuestionOutcome::Unanswered,
                Some(choice) if question.is_correct(choice) => QuestionOutcome::Correct,
                Some(_) => QuestionOutcome::Incorrect,
            })
            .collect();

        QuizScore { outcomes }
    }
}
