use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::error::SourceError;
use crate::models::QuestionSet;

use super::payload::TriviaPayload;
use super::{QuestionSource, ensure_count};

/// Reads questions from a JSON file in the provider's payload format.
///
/// The file may hold more questions than a session needs; each load draws a
/// fresh random subset.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn load_question_set(&self, count: usize) -> Result<QuestionSet, SourceError> {
        ensure_count(count)?;

        log::info!("reading questions from {}", self.path.display());
        let json_content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Io {
                    path: self.path.display().to_string(),
                    source,
                })?;

        let mut payload = TriviaPayload::from_json(&json_content)?;
        if payload.results.len() < count {
            return Err(SourceError::malformed(format!(
                "{} holds {} questions, {} requested",
                self.path.display(),
                payload.results.len(),
                count
            )));
        }

        let mut rng = rand::rng();
        payload.results.shuffle(&mut rng);
        payload.results.truncate(count);
        payload.into_question_set(count, &mut rng)
    }
}
