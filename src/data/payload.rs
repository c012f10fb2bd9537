//! Typed provider payload and its validation into a [`QuestionSet`].

use rand::Rng;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::{Question, QuestionSet};

use super::entities::decode_html;

/// Top-level provider response.
#[derive(Debug, Deserialize)]
pub struct TriviaPayload {
    /// Absent in hand-written question files; zero means success.
    #[serde(default)]
    pub response_code: u8,
    pub results: Vec<RawQuestion>,
}

/// One provider question, still HTML-encoded.
#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl TriviaPayload {
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate, decode and shuffle into exactly `count` questions.
    pub fn into_question_set<R: Rng + ?Sized>(
        self,
        count: usize,
        rng: &mut R,
    ) -> Result<QuestionSet, SourceError> {
        if self.response_code != 0 {
            return Err(SourceError::Provider {
                code: self.response_code,
                reason: response_code_reason(self.response_code),
            });
        }

        if self.results.len() != count {
            return Err(SourceError::malformed(format!(
                "expected {} questions, got {}",
                count,
                self.results.len()
            )));
        }

        let questions = self
            .results
            .into_iter()
            .map(|raw| raw.into_question(rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionSet::new(questions))
    }
}

impl RawQuestion {
    fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Question, SourceError> {
        if let Some(kind) = self.kind.as_deref().filter(|kind| *kind != "multiple") {
            return Err(SourceError::malformed(format!(
                "unsupported question type {:?}",
                kind
            )));
        }

        let incorrect = self
            .incorrect_answers
            .iter()
            .map(|answer| decode_html(answer))
            .collect();

        let question = Question::new(
            decode_html(&self.question),
            decode_html(&self.correct_answer),
            incorrect,
            rng,
        )?;

        Ok(question.with_metadata(
            self.category.as_deref().map(decode_html),
            self.difficulty,
        ))
    }
}

fn response_code_reason(code: u8) -> &'static str {
    match code {
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown provider error",
    }
}
