//! Injected text classifier handle.

use std::future::Future;

use crate::error::SentimentError;
use crate::http::HttpClassifier;
use crate::scorer::LexiconClassifier;
use crate::types::Category;

/// A text classifier producing category confidences.
///
/// The application owns the classifier's lifecycle and passes it to
/// [`crate::analyze_text`]; nothing in this crate caches a global instance.
pub trait TextClassifier {
    /// Classify `text` into category confidences.
    ///
    /// # Errors
    ///
    /// Implementations return [`SentimentError`] when the model cannot be reached
    /// or its output cannot be read.
    fn classify(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Category>, SentimentError>> + Send;
}

/// Classifier chosen at runtime from configuration.
#[derive(Debug)]
pub enum ConfiguredClassifier {
    Lexicon(LexiconClassifier),
    Http(HttpClassifier),
}

impl ConfiguredClassifier {
    /// Use the remote classifier when `url` is set, the offline lexicon otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn from_url(url: Option<&str>, timeout_secs: u64) -> Result<Self, SentimentError> {
        match url {
            Some(url) => Ok(Self::Http(HttpClassifier::new(url, timeout_secs)?)),
            None => Ok(Self::Lexicon(LexiconClassifier)),
        }
    }
}

impl TextClassifier for ConfiguredClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Category>, SentimentError> {
        match self {
            Self::Lexicon(c) => c.classify(text).await,
            Self::Http(c) => c.classify(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_url_selects_lexicon() {
        let classifier = ConfiguredClassifier::from_url(None, 10).unwrap();
        assert!(matches!(classifier, ConfiguredClassifier::Lexicon(_)));
    }

    #[test]
    fn url_selects_http() {
        let classifier =
            ConfiguredClassifier::from_url(Some("http://localhost:9000"), 10).unwrap();
        assert!(matches!(classifier, ConfiguredClassifier::Http(_)));
    }
}
