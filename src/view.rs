//! Read-only view data derived from a [`SessionState`].
//!
//! [`project`] is the only thing rendering code looks at. It never shuffles,
//! fetches or mutates; the same state always projects to the same view.

use crate::models::Question;
use crate::session::{Phase, Score, SessionState, score};

/// How an option should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    /// Not yet answered, or neither chosen nor correct on the review screen.
    Neutral,
    Correct,
    SelectedWrong,
    /// Answered question, option neither chosen nor correct.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub status: OptionStatus,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub options: Vec<OptionView>,
    pub answered: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub score: Score,
    pub items: Vec<ReviewItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Welcome,
    Loading,
    /// Load failed; retry is the only action offered.
    Failed { reason: String },
    Question(QuestionView),
    Review(ReviewView),
}

pub fn project(state: &SessionState) -> ViewModel {
    match state.phase() {
        Phase::Idle => ViewModel::Welcome,
        Phase::Loading => ViewModel::Loading,
        Phase::Failed { reason } => ViewModel::Failed {
            reason: reason.clone(),
        },
        Phase::InProgress => match project_question(state) {
            Some(view) => ViewModel::Question(view),
            None => ViewModel::Loading,
        },
        Phase::Completed => ViewModel::Review(project_review(state)),
    }
}

fn project_question(state: &SessionState) -> Option<QuestionView> {
    let cursor = state.cursor();
    let question = state.current_question()?;
    let answer = state.current_answer()?;
    let total = state.total();

    let options = match answer.selected() {
        None => question
            .options()
            .iter()
            .map(|option| OptionView {
                text: option.clone(),
                status: OptionStatus::Neutral,
                selectable: true,
            })
            .collect(),
        Some(selected) => annotate(question, selected, OptionStatus::Disabled),
    };

    Some(QuestionView {
        number: cursor + 1,
        total,
        prompt: question.prompt().to_string(),
        category: question.category().map(str::to_string),
        difficulty: question.difficulty().map(str::to_string),
        options,
        answered: answer.is_answered(),
        previous_enabled: cursor > 0,
        next_enabled: cursor + 1 < total,
        score: score(state),
    })
}

fn project_review(state: &SessionState) -> ReviewView {
    let items = state
        .questions()
        .iter()
        .zip(state.answers())
        .enumerate()
        .map(|(index, (question, answer))| {
            let selected = answer.selected();
            ReviewItem {
                number: index + 1,
                prompt: question.prompt().to_string(),
                options: annotate(question, selected.unwrap_or_default(), OptionStatus::Neutral),
                is_correct: selected.is_some_and(|option| question.is_correct(option)),
            }
        })
        .collect();

    ReviewView {
        score: score(state),
        items,
    }
}

/// Colour every option of an answered question: the correct answer wins,
/// then the wrong pick, then `rest`.
fn annotate(question: &Question, selected: &str, rest: OptionStatus) -> Vec<OptionView> {
    question
        .options()
        .iter()
        .map(|option| {
            let status = if question.is_correct(option) {
                OptionStatus::Correct
            } else if option == selected {
                OptionStatus::SelectedWrong
            } else {
                rest
            };
            OptionView {
                text: option.clone(),
                status,
                selectable: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::QuestionSet;

    fn state(n: usize) -> SessionState {
        let mut rng = StdRng::seed_from_u64(8);
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{}", i + 1),
                    "right".to_string(),
                    vec!["wrong".to_string(), "other".to_string()],
                    &mut rng,
                )
                .unwrap()
            })
            .collect();
        SessionState::started(QuestionSet::new(questions))
    }

    fn status_of(options: &[OptionView], text: &str) -> OptionStatus {
        options.iter().find(|o| o.text == text).unwrap().status
    }

    #[test]
    fn test_phases_project_to_screens() {
        assert_eq!(project(&SessionState::idle()), ViewModel::Welcome);
        assert_eq!(project(&SessionState::loading()), ViewModel::Loading);
        assert_eq!(
            project(&SessionState::failed("timed out")),
            ViewModel::Failed {
                reason: "timed out".to_string()
            }
        );
    }

    #[test]
    fn test_unanswered_question_is_neutral() {
        let ViewModel::Question(view) = project(&state(3)) else {
            panic!("expected question view");
        };

        assert_eq!(view.number, 1);
        assert_eq!(view.total, 3);
        assert!(!view.answered);
        assert!(view.options.iter().all(|o| o.status == OptionStatus::Neutral && o.selectable));
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);
    }

    #[test]
    fn test_wrong_answer_colouring() {
        let mut state = state(3);
        state.submit_answer("wrong").unwrap();

        let ViewModel::Question(view) = project(&state) else {
            panic!("expected question view");
        };

        assert!(view.answered);
        assert_eq!(status_of(&view.options, "right"), OptionStatus::Correct);
        assert_eq!(status_of(&view.options, "wrong"), OptionStatus::SelectedWrong);
        assert_eq!(status_of(&view.options, "other"), OptionStatus::Disabled);
        assert!(view.options.iter().all(|o| !o.selectable));
    }

    #[test]
    fn test_correct_answer_colouring() {
        let mut state = state(1);
        state.submit_answer("right").unwrap();

        let ViewModel::Review(review) = project(&state) else {
            panic!("expected review view");
        };
        let options = &review.items[0].options;
        assert_eq!(status_of(options, "right"), OptionStatus::Correct);
        assert_eq!(status_of(options, "wrong"), OptionStatus::Neutral);
        assert!(review.items[0].is_correct);
    }

    #[test]
    fn test_navigation_flags_at_last_question() {
        let mut state = state(3);
        state.go_to(2);

        let ViewModel::Question(view) = project(&state) else {
            panic!("expected question view");
        };
        assert!(view.previous_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_single_question_disables_both_buttons() {
        let ViewModel::Question(view) = project(&state(1)) else {
            panic!("expected question view");
        };
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_review_lists_every_question() {
        let mut state = state(2);
        state.submit_answer("right").unwrap();
        state.next();
        state.submit_answer("other").unwrap();

        let ViewModel::Review(review) = project(&state) else {
            panic!("expected review view");
        };

        assert_eq!(review.items.len(), 2);
        assert_eq!(review.score.correct, 1);
        assert!(review.items[0].is_correct);
        assert!(!review.items[1].is_correct);
        assert_eq!(status_of(&review.items[1].options, "other"), OptionStatus::SelectedWrong);
        assert_eq!(status_of(&review.items[1].options, "right"), OptionStatus::Correct);
        assert_eq!(review.score.attempted, 2);
    }

    #[test]
    fn test_projection_does_not_reorder_options() {
        let state = state(1);
        let first = project(&state);
        let second = project(&state);
        assert_eq!(first, second);
    }
}
