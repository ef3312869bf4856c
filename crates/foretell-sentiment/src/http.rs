//! HTTP client for a remote text-classification model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classifier::TextClassifier;
use crate::error::SentimentError;
use crate::types::Category;

/// Remote classifier reached at `{base_url}/classify`.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

/// Accepted response shapes: a bare category list, `{ "categories": [...] }`,
/// or task-style `{ "classifications": [{ "categories": [...] }] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Bare(Vec<Category>),
    Wrapped { categories: Vec<Category> },
    Classifications { classifications: Vec<Classification> },
}

#[derive(Deserialize)]
struct Classification {
    #[serde(default)]
    categories: Vec<Category>,
}

impl ClassifyResponse {
    fn into_categories(self) -> Vec<Category> {
        match self {
            Self::Bare(categories) | Self::Wrapped { categories } => categories,
            Self::Classifications { classifications } => classifications
                .into_iter()
                .next()
                .map(|c| c.categories)
                .unwrap_or_default(),
        }
    }
}

impl HttpClassifier {
    /// Create a new `HttpClassifier`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/classify", base_url.trim_end_matches('/')),
        })
    }
}

impl TextClassifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Category>, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: ClassifyResponse =
            serde_json::from_slice(&body).map_err(|e| SentimentError::Parse(e.to_string()))?;

        Ok(parsed.into_categories())
    }
}
