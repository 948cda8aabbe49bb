use serde::Serialize;
use thiserror::Error;

use crate::core::recommender::Recommender;
use crate::models::{AnswerSet, Product, ProductScore, Question};

/// Errors raised by invalid wizard input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Question {question} has no option {option}")]
    UnknownOption { question: String, option: String },

    #[error("Consultation is not asking a question")]
    NotAsking,
}

/// Consultation progress, passed and returned by value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum WizardState {
    Asking {
        index: usize,
        answers: AnswerSet,
    },
    ShowingResults {
        answers: AnswerSet,
        recommendations: Vec<ProductScore>,
    },
}

impl WizardState {
    pub fn answers(&self) -> &AnswerSet {
        match self {
            WizardState::Asking { answers, .. } | WizardState::ShowingResults { answers, .. } => answers,
        }
    }

    pub fn is_showing_results(&self) -> bool {
        matches!(self, WizardState::ShowingResults { .. })
    }
}

/// Drives the consultation questionnaire
///
/// Transitions:
/// - `next` from question i moves to i+1, or scores and shows results after
///   the last question. It is a no-op while the current question is unanswered.
/// - `previous` moves back one question, never below the first.
/// - `restart` returns to the first question with no answers.
#[derive(Debug, Clone, Copy)]
pub struct Consultation<'a> {
    questions: &'a [Question],
    products: &'a [Product],
    recommender: &'a Recommender,
}

impl<'a> Consultation<'a> {
    pub fn new(questions: &'a [Question], products: &'a [Product], recommender: &'a Recommender) -> Self {
        Self {
            questions,
            products,
            recommender,
        }
    }

    pub fn start(&self) -> WizardState {
        WizardState::Asking {
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn current_question(&self, state: &WizardState) -> Option<&'a Question> {
        match state {
            WizardState::Asking { index, .. } => self.questions.get(*index),
            WizardState::ShowingResults { .. } => None,
        }
    }

    /// 1-based position of the current question and the question count
    pub fn progress(&self, state: &WizardState) -> Option<(usize, usize)> {
        match state {
            WizardState::Asking { index, .. } => Some((index + 1, self.questions.len())),
            WizardState::ShowingResults { .. } => None,
        }
    }

    /// Whether `next` would advance
    pub fn can_proceed(&self, state: &WizardState) -> bool {
        match (state, self.current_question(state)) {
            (WizardState::Asking { answers, .. }, Some(question)) => answers.is_answered(&question.id),
            _ => false,
        }
    }

    /// Select (or, for multiple choice, toggle) an option on the current question
    pub fn select(&self, state: WizardState, option_id: &str) -> Result<WizardState, WizardError> {
        let question = self.current_question(&state).ok_or(WizardError::NotAsking)?;

        if question.option(option_id).is_none() {
            return Err(WizardError::UnknownOption {
                question: question.id.clone(),
                option: option_id.to_string(),
            });
        }

        match state {
            WizardState::Asking { index, mut answers } => {
                answers.select(question, option_id);
                Ok(WizardState::Asking { index, answers })
            }
            WizardState::ShowingResults { .. } => Err(WizardError::NotAsking),
        }
    }

    pub fn next(&self, state: WizardState) -> WizardState {
        if !self.can_proceed(&state) {
            tracing::debug!("Next ignored: current question has no selection");
            return state;
        }

        match state {
            WizardState::Asking { index, answers } if index + 1 < self.questions.len() => {
                WizardState::Asking { index: index + 1, answers }
            }
            WizardState::Asking { answers, .. } => {
                let result = self.recommender.recommend(self.products, self.questions, &answers);
                tracing::info!(
                    "Consultation finished: {} recommendations from {} products",
                    result.recommendations.len(),
                    result.total_candidates
                );
                WizardState::ShowingResults {
                    answers,
                    recommendations: result.recommendations,
                }
            }
            other => other,
        }
    }

    pub fn previous(&self, state: WizardState) -> WizardState {
        match state {
            WizardState::Asking { index, answers } if index > 0 => WizardState::Asking {
                index: index - 1,
                answers,
            },
            other => other,
        }
    }

    pub fn restart(&self, _state: WizardState) -> WizardState {
        self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_products, default_questions};

    fn index_of(state: &WizardState) -> Option<usize> {
        match state {
            WizardState::Asking { index, .. } => Some(*index),
            WizardState::ShowingResults { .. } => None,
        }
    }

    #[test]
    fn test_next_guarded_until_answered() {
        let (questions, products, recommender) = (default_questions(), default_products(), Recommender::default());
        let wizard = Consultation::new(&questions, &products, &recommender);

        let state = wizard.start();
        assert!(!wizard.can_proceed(&state));

        let state = wizard.next(state);
        assert_eq!(index_of(&state), Some(0));

        let state = wizard.select(state, "medium").unwrap();
        assert!(wizard.can_proceed(&state));
        let state = wizard.next(state);
        assert_eq!(index_of(&state), Some(1));
        assert_eq!(wizard.progress(&state), Some((2, 5)));
    }

    #[test]
    fn test_previous_stops_at_first_question() {
        let (questions, products, recommender) = (default_questions(), default_products(), Recommender::default());
        let wizard = Consultation::new(&questions, &products, &recommender);

        let state = wizard.previous(wizard.start());
        assert_eq!(index_of(&state), Some(0));

        let state = wizard.select(state, "low").unwrap();
        let state = wizard.previous(wizard.next(state));
        assert_eq!(index_of(&state), Some(0));
        assert_eq!(state.answers().selected("budget"), ["low"]);
    }

    #[test]
    fn test_full_walkthrough_and_restart() {
        let (questions, products, recommender) = (default_questions(), default_products(), Recommender::default());
        let wizard = Consultation::new(&questions, &products, &recommender);

        let mut state = wizard.start();
        for option in ["medium", "sinks", "modern", "quality", "sometimes"] {
            state = wizard.select(state, option).unwrap();
            state = wizard.next(state);
        }

        assert!(state.is_showing_results());
        match &state {
            WizardState::ShowingResults { recommendations, .. } => {
                assert!(!recommendations.is_empty());
                assert!(recommendations.len() <= 3);
                assert_eq!(recommendations[0].product.slug, "blanco-stainless-kitchen-sink");
                assert_eq!(recommendations[0].score, 90);
            }
            other => panic!("unexpected state {:?}", other),
        }

        assert_eq!(wizard.select(state.clone(), "low"), Err(WizardError::NotAsking));

        let state = wizard.restart(state);
        assert_eq!(state, wizard.start());
        assert!(state.answers().is_empty());
    }

    #[test]
    fn test_select_unknown_option() {
        let (questions, products, recommender) = (default_questions(), default_products(), Recommender::default());
        let wizard = Consultation::new(&questions, &products, &recommender);

        let err = wizard.select(wizard.start(), "sinks").unwrap_err();
        assert_eq!(
            err,
            WizardError::UnknownOption {
                question: "budget".to_string(),
                option: "sinks".to_string(),
            }
        );
    }
}
