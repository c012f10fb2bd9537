//! Owner of the session state.
//!
//! Every load is stamped with a generation. A load result is applied only if
//! its generation is still the current one, so a response that arrives after
//! the user abandoned or restarted the session is dropped.

use crate::data::QuestionSource;
use crate::error::{QuizError, SessionError, SourceError};
use crate::models::QuestionSet;

use super::score::{Score, score};
use super::state::{Phase, SessionState, Submission};

/// Proof that a load was started. Hand it back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    count: usize,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
    generation: u64,
    pending: Option<u64>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn score(&self) -> Score {
        score(&self.state)
    }

    /// Start a new session generation and enter [`Phase::Loading`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LoadInFlight` while an earlier load has not
    /// completed or been abandoned.
    pub fn begin_load(&mut self, count: usize) -> Result<LoadTicket, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::LoadInFlight);
        }

        self.generation += 1;
        self.pending = Some(self.generation);
        self.state = SessionState::loading();
        log::debug!("session generation {} loading {} questions", self.generation, count);

        Ok(LoadTicket {
            generation: self.generation,
            count,
        })
    }

    /// Install the outcome of a load. Returns false when the ticket belongs
    /// to a superseded generation and the result was discarded.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<QuestionSet, SourceError>,
    ) -> bool {
        if self.pending != Some(ticket.generation) {
            log::warn!(
                "discarding load for generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.pending = None;
        self.state = match result {
            Ok(questions) => {
                log::info!(
                    "session generation {} started with {} questions",
                    ticket.generation,
                    questions.len()
                );
                SessionState::started(questions)
            }
            Err(err) => {
                log::warn!("session generation {} failed to load: {}", ticket.generation, err);
                SessionState::failed(err.to_string())
            }
        };
        true
    }

    /// Drop the load in flight, if any, and go back to [`Phase::Idle`].
    pub fn abandon(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
            self.state = SessionState::idle();
            log::debug!("load abandoned, generation now {}", self.generation);
        }
    }

    /// Load a fresh question set from `source` and start a session with it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Source` when the source fails; the state is then
    /// [`Phase::Failed`] and a later call may succeed.
    pub async fn start_session(
        &mut self,
        source: &dyn QuestionSource,
        count: usize,
    ) -> Result<&SessionState, QuizError> {
        let ticket = self.begin_load(count)?;

        match source.load_question_set(count).await {
            Ok(questions) => {
                self.complete_load(ticket, Ok(questions));
                Ok(&self.state)
            }
            Err(err) => {
                let reason = err.to_string();
                log::warn!("session generation {} failed to load: {}", ticket.generation, reason);
                self.pending = None;
                self.state = SessionState::failed(reason);
                Err(err.into())
            }
        }
    }

    pub fn submit_answer(&mut self, option: &str) -> Result<Submission, SessionError> {
        let outcome = self.state.submit_answer(option)?;
        match outcome {
            Submission::Recorded { correct } => {
                log::debug!(
                    "question {} answered ({})",
                    self.state.cursor() + 1,
                    if correct { "correct" } else { "incorrect" }
                );
                if self.state.is_completed() {
                    let score = self.score();
                    log::info!(
                        "session generation {} completed: {}/{}",
                        self.generation,
                        score.correct,
                        score.total
                    );
                }
            }
            Submission::AlreadyAnswered => {
                log::debug!("question {} already answered", self.state.cursor() + 1);
            }
            Submission::Ignored => {
                log::debug!("answer ignored in phase {:?}", self.state.phase());
            }
        }
        Ok(outcome)
    }

    /// Submit the option at `index` of the current question.
    pub fn submit_option(&mut self, index: usize) -> Result<Submission, SessionError> {
        if self.state.phase() != &Phase::InProgress {
            return Ok(Submission::Ignored);
        }

        let option = self
            .state
            .current_question()
            .and_then(|question| question.options().get(index))
            .cloned();

        match option {
            Some(option) => self.submit_answer(&option),
            None => Err(SessionError::InvalidTransition(format!(
                "no option {} on question {}",
                index + 1,
                self.state.cursor() + 1
            ))),
        }
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        self.state.go_to(index)
    }

    pub fn next(&mut self) -> usize {
        self.state.next()
    }

    pub fn previous(&mut self) -> usize {
        self.state.previous()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::Question;

    fn question_set(n: usize) -> QuestionSet {
        let mut rng = StdRng::seed_from_u64(21);
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{}", i),
                    "yes".to_string(),
                    vec!["no".to_string()],
                    &mut rng,
                )
                .unwrap()
            })
            .collect();
        QuestionSet::new(questions)
    }

    struct FixedSource;

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn load_question_set(&self, count: usize) -> Result<QuestionSet, SourceError> {
            Ok(question_set(count))
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl QuestionSource for BrokenSource {
        async fn load_question_set(&self, _count: usize) -> Result<QuestionSet, SourceError> {
            Err(SourceError::malformed("no results"))
        }
    }

    #[test]
    fn test_begin_load_not_reentrant() {
        let mut controller = SessionController::new();
        let ticket = controller.begin_load(3).unwrap();
        assert_eq!(ticket.generation(), 1);
        assert_eq!(*controller.state().phase(), Phase::Loading);
        assert_eq!(controller.begin_load(3), Err(SessionError::LoadInFlight));

        assert!(controller.complete_load(ticket, Ok(question_set(3))));
        assert_eq!(*controller.state().phase(), Phase::InProgress);
        assert!(controller.begin_load(3).is_ok());
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut controller = SessionController::new();
        let stale = controller.begin_load(2).unwrap();
        controller.abandon();
        assert_eq!(*controller.state().phase(), Phase::Idle);

        let fresh = controller.begin_load(4).unwrap();
        assert!(!controller.complete_load(stale, Ok(question_set(2))));
        assert_eq!(*controller.state().phase(), Phase::Loading);

        assert!(controller.complete_load(fresh, Ok(question_set(4))));
        assert_eq!(controller.state().total(), 4);

        // A late duplicate of an applied ticket changes nothing either.
        assert!(!controller.complete_load(fresh, Ok(question_set(1))));
        assert_eq!(controller.state().total(), 4);
    }

    #[test]
    fn test_abandon_without_load_is_noop() {
        let mut controller = SessionController::new();
        controller.abandon();
        assert_eq!(controller.generation(), 0);
        assert_eq!(*controller.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_failed_load_installs_nothing() {
        let mut controller = SessionController::new();
        let ticket = controller.begin_load(3).unwrap();
        controller.complete_load(ticket, Err(SourceError::malformed("bad")));

        assert!(matches!(controller.state().phase(), Phase::Failed { .. }));
        assert!(controller.state().questions().is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_submit_option_by_index() {
        let mut controller = SessionController::new();
        let ticket = controller.begin_load(1).unwrap();
        controller.complete_load(ticket, Ok(question_set(1)));

        let index = controller
            .state()
            .current_question()
            .unwrap()
            .options()
            .iter()
            .position(|o| o == "yes")
            .unwrap();

        assert!(matches!(
            controller.submit_option(5),
            Err(SessionError::InvalidTransition(_))
        ));
        assert_eq!(
            controller.submit_option(index).unwrap(),
            Submission::Recorded { correct: true }
        );
        assert!(controller.state().is_completed());
        assert_eq!(controller.score().correct, 1);
    }

    #[tokio::test]
    async fn test_start_session_success() {
        let mut controller = SessionController::new();
        let state = controller.start_session(&FixedSource, 5).await.unwrap();
        assert_eq!(state.total(), 5);
        assert_eq!(*state.phase(), Phase::InProgress);
    }

    #[tokio::test]
    async fn test_start_session_failure_then_retry() {
        let mut controller = SessionController::new();
        let result = controller.start_session(&BrokenSource, 5).await;
        assert!(matches!(result, Err(QuizError::Source(SourceError::Malformed(_)))));
        assert!(matches!(controller.state().phase(), Phase::Failed { .. }));

        let state = controller.start_session(&FixedSource, 2).await.unwrap();
        assert_eq!(*state.phase(), Phase::InProgress);
        assert_eq!(controller.generation(), 2);
    }
}
