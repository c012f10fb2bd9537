//! Question sources.
//!
//! A [`QuestionSource`] hands back a fully validated [`QuestionSet`]: text
//! decoded, options shuffled. Nothing malformed gets past this module.

mod entities;
mod loader;
mod opentdb;
mod payload;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::QuestionSet;

pub use entities::decode_html;
pub use loader::FileSource;
pub use opentdb::{DEFAULT_API_URL, OpenTdbConfig, OpenTdbSource};
pub use payload::{RawQuestion, TriviaPayload};

/// Something that can produce a question set for a new session.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load exactly `count` questions.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when `count` is zero, the source cannot be
    /// reached, or what it returns does not validate.
    async fn load_question_set(&self, count: usize) -> Result<QuestionSet, SourceError>;
}

pub(crate) fn ensure_count(count: usize) -> Result<(), SourceError> {
    if count == 0 {
        Err(SourceError::InvalidCount)
    } else {
        Ok(())
    }
}
