//! Threshold math shared by the classifier adapter and the reward engine.
//!
//! A classifier score in `[0, 1]` maps to a polarity through two cutoffs and
//! to an intensity through a piecewise-linear "confidence zone" per polarity.

use serde::{Deserialize, Serialize};

use crate::polarity::Polarity;

/// Score reported when no classifier signal is available.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Cutoffs and zone widths used to derive polarity and intensity.
///
/// Changing these moves entries between reward groups, so one set must be
/// applied consistently for the lifetime of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    /// `score > positive_above` is positive.
    pub positive_above: f64,
    /// `score < negative_below` is negative.
    pub negative_below: f64,
    /// Negative intensity falls from 1 at score 0 to 0 at this score.
    pub negative_zone: f64,
    /// Neutral intensity falls from 1 at 0.5 to 0 at this distance from 0.5.
    pub neutral_half_width: f64,
    /// Positive intensity rises from 0 at this score to 1 at score 1.
    pub positive_floor: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive_above: 0.8,
            negative_below: 0.2,
            negative_zone: 0.3,
            neutral_half_width: 0.2,
            positive_floor: 0.7,
        }
    }
}

impl SentimentThresholds {
    /// Bucket a score.
    #[must_use]
    pub fn polarity_for(&self, score: f64) -> Polarity {
        if score > self.positive_above {
            Polarity::Positive
        } else if score < self.negative_below {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Strength of `score` inside the confidence zone of `polarity`, in `[0, 1]`.
    #[must_use]
    pub fn intensity_for(&self, polarity: Polarity, score: f64) -> f64 {
        match polarity {
            Polarity::Negative => 1.0 - (score / self.negative_zone).clamp(0.0, 1.0),
            Polarity::Neutral => {
                1.0 - ((score - NEUTRAL_SCORE).abs() / self.neutral_half_width).clamp(0.0, 1.0)
            }
            Polarity::Positive => {
                ((score - self.positive_floor) / (1.0 - self.positive_floor)).clamp(0.0, 1.0)
            }
        }
    }

    /// Derive the full reading for a score.
    ///
    /// Non-finite scores are treated as the neutral midpoint and finite ones
    /// are clamped to `[0, 1]`.
    #[must_use]
    pub fn reading(&self, score: f64) -> SentimentReading {
        let score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            NEUTRAL_SCORE
        };
        let polarity = self.polarity_for(score);
        SentimentReading {
            polarity,
            score,
            intensity: self.intensity_for(polarity, score),
        }
    }
}

/// Engine-facing triple produced from a classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub polarity: Polarity,
    pub score: f64,
    pub intensity: f64,
}

impl SentimentReading {
    /// Fallback used when there is no text or no classifier.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            polarity: Polarity::Neutral,
            score: NEUTRAL_SCORE,
            intensity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cutoffs_are_strict() {
        let t = SentimentThresholds::default();
        assert_eq!(t.polarity_for(0.8), Polarity::Neutral);
        assert_eq!(t.polarity_for(0.2), Polarity::Neutral);
        assert_eq!(t.polarity_for(0.800_001), Polarity::Positive);
        assert_eq!(t.polarity_for(0.199_999), Polarity::Negative);
    }

    #[test]
    fn negative_intensity_endpoints() {
        let t = SentimentThresholds::default();
        assert!(approx(t.intensity_for(Polarity::Negative, 0.0), 1.0));
        assert!(approx(t.intensity_for(Polarity::Negative, 0.3), 0.0));
        assert!(approx(t.intensity_for(Polarity::Negative, 0.1), 2.0 / 3.0));
    }

    #[test]
    fn neutral_intensity_peaks_at_midpoint() {
        let t = SentimentThresholds::default();
        assert!(approx(t.intensity_for(Polarity::Neutral, 0.5), 1.0));
        assert!(approx(t.intensity_for(Polarity::Neutral, 0.3), 0.0));
        assert!(approx(t.intensity_for(Polarity::Neutral, 0.75), 0.0));
        assert!(approx(t.intensity_for(Polarity::Neutral, 0.6), 0.5));
    }

    #[test]
    fn positive_intensity_endpoints() {
        let t = SentimentThresholds::default();
        assert!(approx(t.intensity_for(Polarity::Positive, 0.7), 0.0));
        assert!(approx(t.intensity_for(Polarity::Positive, 1.0), 1.0));
        assert!(approx(t.intensity_for(Polarity::Positive, 0.95), 0.25 / 0.3));
    }

    #[test]
    fn reading_polarity_always_matches_cutoffs() {
        let t = SentimentThresholds::default();
        for step in 0..=1000 {
            let score = f64::from(step) / 1000.0;
            let reading = t.reading(score);
            assert_eq!(reading.polarity, t.polarity_for(score), "score {score}");
            assert!(
                (0.0..=1.0).contains(&reading.intensity),
                "intensity out of range at {score}: {}",
                reading.intensity
            );
        }
    }

    #[test]
    fn reading_sanitizes_bad_scores() {
        let t = SentimentThresholds::default();
        assert!(approx(t.reading(f64::NAN).score, NEUTRAL_SCORE));
        assert!(approx(t.reading(1.7).score, 1.0));
        assert!(approx(t.reading(-0.2).score, 0.0));
    }

    #[test]
    fn neutral_fallback_shape() {
        let r = SentimentReading::neutral();
        assert_eq!(r.polarity, Polarity::Neutral);
        assert!(approx(r.score, 0.5));
        assert!(approx(r.intensity, 0.0));
    }
}
