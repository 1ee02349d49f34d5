use dioxus::prelude::*;
use dioxus_router::Link;
use gateway_core::model::{CourseId, QuizId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::NotFoundPanel;
use crate::vm::{QuestionVm, QuizAttempt, QuizDetailVm, map_quiz_detail, quiz_attempt_key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizAction {
    Pick { question: usize, choice: usize },
    Submit,
    Reset,
}

#[component]
pub fn QuizView(course_id: String, quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut attempt = use_signal(QuizAttempt::default);

    let course = ctx.catalog().get_course(&CourseId::new(course_id.as_str()));
    let quiz_id = QuizId::new(quiz_id);
    let question_count = course
        .as_ref()
        .and_then(|course| course.quiz(&quiz_id))
        .map_or(0, |quiz| quiz.questions.len());
    let key = quiz_attempt_key(&course_id, quiz_id.as_str());
    let current = attempt.read().synced(&key, question_count);

    let dispatch = use_callback(move |action: QuizAction| {
        attempt.with_mut(|attempt| {
            *attempt = attempt.synced(&key, question_count);
            match action {
                QuizAction::Pick { question, choice } => attempt.pick(question, choice),
                QuizAction::Submit => attempt.submit(),
                QuizAction::Reset => attempt.reset(),
            }
        });
    });

    let detail = course
        .as_ref()
        .and_then(|course| map_quiz_detail(course, &quiz_id, &current));

    match detail {
        Some(quiz) => rsx! { QuizDetails { quiz, dispatch } },
        None => rsx! {
            NotFoundPanel {
                title: "Quiz Not Found",
                message: "This quiz isn't part of the course.",
                back_label: "Back to Course",
                back_to: Route::Course { course_id },
            }
        },
    }
}

#[component]
fn QuizDetails(quiz: QuizDetailVm, dispatch: Callback<QuizAction>) -> Element {
    let locked = quiz.score.is_some();
    let score_label = quiz.score.map(|score| score.label());

    rsx! {
        div { class: "page quiz",
            Link {
                class: "back-link",
                to: Route::Course { course_id: quiz.course_id.clone() },
                "← Back to {quiz.course_title}"
            }

            header { class: "page-header",
                h1 { "{quiz.title}" }
                if let Some(label) = score_label {
                    p { class: "quiz-score", "data-testid": "text-quiz-score", "{label}" }
                }
            }

            for question in quiz.questions.clone() {
                QuestionCard { key: "{question.index}", question: question.clone(), locked, dispatch }
            }

            div { class: "quiz-actions",
                if locked {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        "data-testid": "button-quiz-retry",
                        onclick: move |_| dispatch.call(QuizAction::Reset),
                        "Try again"
                    }
                } else {
                    button {
                        class: "btn",
                        r#type: "button",
                        "data-testid": "button-quiz-submit",
                        onclick: move |_| dispatch.call(QuizAction::Submit),
                        "Submit Answers"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, locked: bool, dispatch: Callback<QuizAction>) -> Element {
    let index = question.index;
    let number = index + 1;
    let outcome = question.outcome_label();
    let card_class = format!("card {}", question.outcome_class());

    rsx! {
        fieldset { class: "{card_class}", "data-testid": "question-{index}",
            legend { "{number}. {question.prompt}" }
            for choice in question.choices.clone() {
                label { class: choice_class(choice.is_answer),
                    input {
                        r#type: "radio",
                        name: "question-{index}",
                        value: "{choice.index}",
                        checked: choice.selected,
                        disabled: locked,
                        onchange: move |_| dispatch.call(QuizAction::Pick {
                            question: index,
                            choice: choice.index,
                        }),
                    }
                    span { "{choice.label}" }
                }
            }
            if let Some(outcome) = outcome {
                p { class: "question-outcome", "data-testid": "marker-question-{index}", "{outcome}" }
            }
        }
    }
}

fn choice_class(is_answer: bool) -> &'static str {
    if is_answer {
        "choice choice-answer"
    } else {
        "choice"
    }
}
