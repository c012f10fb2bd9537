use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::Difficulty;
use crate::error::SourceError;
use crate::models::QuestionSet;

use super::payload::TriviaPayload;
use super::{QuestionSource, ensure_count};

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

#[derive(Clone, Debug)]
pub struct OpenTdbConfig {
    pub api_url: String,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub timeout: Duration,
}

impl Default for OpenTdbConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            category: None,
            difficulty: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches multiple-choice questions from an Open Trivia DB style endpoint.
#[derive(Clone)]
pub struct OpenTdbSource {
    client: Client,
    base_url: Url,
    config: OpenTdbConfig,
}

impl OpenTdbSource {
    /// # Errors
    ///
    /// Returns `SourceError` when the API URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: OpenTdbConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(&config.api_url).map_err(|err| {
            SourceError::malformed(format!("invalid API URL {:?}: {}", config.api_url, err))
        })?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn request_url(&self, count: usize) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("amount", &count.to_string());
            query.append_pair("type", "multiple");
            if let Some(category) = self.config.category {
                query.append_pair("category", &category.to_string());
            }
            if let Some(difficulty) = self.config.difficulty {
                query.append_pair("difficulty", difficulty.as_str());
            }
        }
        url
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    async fn load_question_set(&self, count: usize) -> Result<QuestionSet, SourceError> {
        ensure_count(count)?;

        let url = self.request_url(count);
        log::info!("requesting {} questions from {}", count, url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let payload = TriviaPayload::from_json(&body)?;
        payload.into_question_set(count, &mut rand::rng())
    }
}
