//! Sentiment classifier adapter for Foretell.
//!
//! Turns a text classifier's categorical output (`positive` / `negative`
//! confidences) into the `(polarity, score, intensity)` reading stored on
//! each survey response. Classification is best-effort: a missing classifier,
//! empty text, or a failed call all yield the neutral reading.

pub mod adapter;
pub mod classifier;
pub mod error;
pub mod http;
pub mod scorer;
pub mod types;

pub use adapter::{analyze_text, reading_from_categories};
pub use classifier::{ConfiguredClassifier, TextClassifier};
pub use error::SentimentError;
pub use http::HttpClassifier;
pub use scorer::{lexicon_score, LexiconClassifier};
pub use types::{Category, CategoryLabel};
