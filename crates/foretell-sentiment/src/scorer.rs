//! Offline lexicon scorer for free-text survey answers.

use crate::classifier::TextClassifier;
use crate::error::SentimentError;
use crate::types::{Category, CategoryLabel};

/// Opinion word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("like", 0.2),
    ("best", 0.5),
    ("better", 0.3),
    ("recommend", 0.4),
    ("happy", 0.4),
    ("helpful", 0.3),
    ("easy", 0.3),
    ("clean", 0.2),
    ("fast", 0.2),
    ("intuitive", 0.3),
    ("agree", 0.3),
    ("yes", 0.2),
    ("bullish", 0.5),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("worse", -0.4),
    ("hate", -0.6),
    ("dislike", -0.4),
    ("broken", -0.5),
    ("confusing", -0.4),
    ("slow", -0.3),
    ("ugly", -0.4),
    ("useless", -0.6),
    ("failed", -0.4),
    ("failure", -0.4),
    ("problem", -0.3),
    ("concern", -0.3),
    ("disagree", -0.3),
    ("no", -0.2),
    ("scam", -0.7),
    ("bearish", -0.5),
];

/// Score a text string using the opinion lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Classifier backed by [`lexicon_score`].
///
/// Maps the lexicon score onto `positive = (s + 1) / 2` and
/// `negative = 1 - positive`, highest confidence first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    #[must_use]
    pub fn categories(text: &str) -> Vec<Category> {
        let positive = (f64::from(lexicon_score(text)) + 1.0) / 2.0;
        let negative = 1.0 - positive;
        let mut categories = vec![
            Category::new(CategoryLabel::Positive.as_str(), positive),
            Category::new(CategoryLabel::Negative.as_str(), negative),
        ];
        if negative > positive {
            categories.reverse();
        }
        categories
    }
}

impl TextClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Category>, SentimentError> {
        Ok(Self::categories(text))
    }
}
