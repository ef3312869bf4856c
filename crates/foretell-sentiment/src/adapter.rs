//! Classifier output to sentiment reading.

use foretell_core::{SentimentReading, SentimentThresholds};

use crate::classifier::TextClassifier;
use crate::types::{Category, CategoryLabel};

/// Map classifier categories to a reading.
///
/// The first `positive` category wins; otherwise the first `negative` one is
/// inverted (`1 - score`). With neither present there is no signal and the
/// neutral fallback reading is returned. Unrecognised categories are ignored.
#[must_use]
pub fn reading_from_categories(
    categories: &[Category],
    thresholds: &SentimentThresholds,
) -> SentimentReading {
    let find = |label: CategoryLabel| {
        categories
            .iter()
            .find(|c| c.label() == Some(label))
            .map(|c| c.score)
    };

    let score = match (find(CategoryLabel::Positive), find(CategoryLabel::Negative)) {
        (Some(pos), _) => pos,
        (None, Some(neg)) => 1.0 - neg,
        (None, None) => return SentimentReading::neutral(),
    };

    thresholds.reading(score)
}

/// Classify `text` and derive its reading.
///
/// Never fails: with no classifier, blank text, or a classifier error the
/// neutral reading is returned so submission is not blocked.
pub async fn analyze_text<C>(
    classifier: Option<&C>,
    text: &str,
    thresholds: &SentimentThresholds,
) -> SentimentReading
where
    C: TextClassifier + ?Sized,
{
    let Some(classifier) = classifier else {
        tracing::debug!("no classifier available; using neutral reading");
        return SentimentReading::neutral();
    };
    if text.trim().is_empty() {
        return SentimentReading::neutral();
    }

    match classifier.classify(text).await {
        Ok(categories) => {
            let reading = reading_from_categories(&categories, thresholds);
            tracing::debug!(
                polarity = %reading.polarity,
                score = reading.score,
                intensity = reading.intensity,
                "classified response"
            );
            reading
        }
        Err(e) => {
            tracing::warn!(error = %e, "classifier failed; using neutral reading");
            SentimentReading::neutral()
        }
    }
}
