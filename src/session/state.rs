//! The quiz attempt itself: questions, recorded answers, cursor, phase.

use crate::error::SessionError;
use crate::models::{AnswerRecord, Question, QuestionSet};

/// Coarse lifecycle stage of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet, or the last load was abandoned.
    #[default]
    Idle,
    Loading,
    InProgress,
    Completed,
    /// The question source could not deliver. Only a retry is possible.
    Failed { reason: String },
}

/// Outcome of [`SessionState::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Recorded { correct: bool },
    /// The question under the cursor already has an answer; nothing changed.
    AlreadyAnswered,
    /// No question set is active; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    questions: QuestionSet,
    answers: Vec<AnswerRecord>,
    cursor: usize,
    phase: Phase,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            phase: Phase::Loading,
            ..Self::default()
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            phase: Phase::Failed {
                reason: reason.into(),
            },
            ..Self::default()
        }
    }

    /// A fresh attempt at `questions`: every answer unrecorded, cursor on the
    /// first question.
    pub fn started(questions: QuestionSet) -> Self {
        let answers = vec![AnswerRecord::Unanswered; questions.len()];
        let phase = if questions.is_empty() {
            Phase::Completed
        } else {
            Phase::InProgress
        };

        Self {
            questions,
            answers,
            cursor: 0,
            phase,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers.get(self.cursor)
    }

    /// True while the question set is installed (in progress or completed).
    pub fn has_questions(&self) -> bool {
        matches!(self.phase, Phase::InProgress | Phase::Completed)
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Record `option` for the question under the cursor.
    ///
    /// Answering an already answered question is a no-op, and so is any
    /// submission outside [`Phase::InProgress`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if the cursor is out of
    /// range or `option` is not one of the question's options.
    pub fn submit_answer(&mut self, option: &str) -> Result<Submission, SessionError> {
        if self.phase != Phase::InProgress {
            return Ok(Submission::Ignored);
        }

        let cursor = self.cursor;
        let (Some(question), Some(record)) =
            (self.questions.get(cursor), self.answers.get_mut(cursor))
        else {
            return Err(SessionError::InvalidTransition(format!(
                "cursor {} outside {} questions",
                cursor,
                self.questions.len()
            )));
        };

        if record.is_answered() {
            return Ok(Submission::AlreadyAnswered);
        }

        if !question.offers(option) {
            return Err(SessionError::InvalidTransition(format!(
                "{:?} is not an option of question {}",
                option,
                cursor + 1
            )));
        }

        let correct = question.is_correct(option);
        *record = AnswerRecord::AnsweredWith(option.to_string());

        if self.answers.iter().all(AnswerRecord::is_answered) {
            self.phase = Phase::Completed;
        }

        Ok(Submission::Recorded { correct })
    }

    /// Move the cursor to `index`, clamped to the question range. Returns the
    /// resulting cursor. Does nothing without a question set.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.has_questions() && !self.questions.is_empty() {
            self.cursor = index.min(self.questions.len() - 1);
        }
        self.cursor
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.cursor.saturating_add(1))
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.cursor.saturating_sub(1))
    }
}
