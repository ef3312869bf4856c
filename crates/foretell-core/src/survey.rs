use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SubmissionError};
use crate::polarity::Polarity;
use crate::sentiment::{SentimentReading, SentimentThresholds};

/// One respondent's submission. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntry {
    pub uid: String,
    pub polarity: Polarity,
    pub score: f64,
    /// Absent on older entries; see [`ResponseEntry::intensity_or_derived`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResponseEntry {
    /// Build an entry from a classifier reading.
    #[must_use]
    pub fn from_reading(
        uid: impl Into<String>,
        answer: impl Into<String>,
        reading: SentimentReading,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: uid.into(),
            polarity: reading.polarity,
            score: reading.score,
            intensity: Some(reading.intensity),
            answer: Some(answer.into()),
            created_at: Some(created_at),
        }
    }

    /// Stored intensity, or one recomputed from `polarity` and `score`.
    ///
    /// A missing intensity is never treated as zero.
    #[must_use]
    pub fn intensity_or_derived(&self, thresholds: &SentimentThresholds) -> f64 {
        self.intensity
            .unwrap_or_else(|| thresholds.intensity_for(self.polarity, self.score))
    }

    /// Locally generated token for respondents of anonymous surveys.
    #[must_use]
    pub fn anonymous_uid() -> String {
        format!("anon-{}", uuid::Uuid::new_v4())
    }
}

/// Token reward attached to a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub chain_id: String,
    pub native_token: bool,
    pub reward_pool: f64,
    pub token_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub survey_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_responses: Option<u32>,
    #[serde(default)]
    pub responses: Vec<ResponseEntry>,
    #[serde(default)]
    pub reward_pool: Option<Reward>,
    #[serde(default)]
    pub allow_anonymity: bool,
    #[serde(default)]
    pub discoverable: bool,
    #[serde(default)]
    pub is_demo: bool,
}

impl Survey {
    /// Pool to distribute, falling back to `default` when the survey defines none.
    #[must_use]
    pub fn pool_amount(&self, default: f64) -> f64 {
        self.reward_pool.as_ref().map_or(default, |r| r.reward_pool)
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| now > expiry)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_responses
            .is_some_and(|max| self.responses.len() >= max as usize)
    }

    /// A survey resolves by time (expiry passed) or by quantity (response cap reached).
    #[must_use]
    pub fn is_resolved(&self, now: DateTime<Utc>) -> bool {
        self.is_expired(now) || self.is_full()
    }

    /// Check whether `uid` may submit `answer` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] for an empty answer, an expired or full
    /// survey, or a uid that has already responded.
    pub fn check_submission(
        &self,
        uid: &str,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<(), SubmissionError> {
        if answer.trim().is_empty() {
            return Err(SubmissionError::EmptyAnswer);
        }
        if self.is_expired(now) {
            return Err(SubmissionError::Expired(self.survey_id.clone()));
        }
        if let Some(max) = self.max_responses {
            if self.responses.len() >= max as usize {
                return Err(SubmissionError::Full {
                    survey_id: self.survey_id.clone(),
                    max,
                });
            }
        }
        if self.responses.iter().any(|r| r.uid == uid) {
            return Err(SubmissionError::DuplicateUid(uid.to_string()));
        }
        Ok(())
    }
}

/// Load and validate a survey document.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_survey(path: &Path) -> Result<Survey, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SurveyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let survey: Survey = if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::SurveyFileParse(e.to_string()))?
    } else {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::SurveyFileParse(e.to_string()))?
    };

    validate_survey(&survey)?;

    tracing::debug!(
        survey_id = %survey.survey_id,
        responses = survey.responses.len(),
        "loaded survey"
    );

    Ok(survey)
}

fn validate_survey(survey: &Survey) -> Result<(), ConfigError> {
    if survey.survey_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "surveyId must be non-empty".to_string(),
        ));
    }

    if let Some(reward) = &survey.reward_pool {
        if !reward.reward_pool.is_finite() || reward.reward_pool < 0.0 {
            return Err(ConfigError::Validation(format!(
                "survey '{}' has invalid reward pool {}",
                survey.survey_id, reward.reward_pool
            )));
        }
    }

    let mut seen_uids = HashSet::new();
    for entry in &survey.responses {
        if !entry.score.is_finite() || !(0.0..=1.0).contains(&entry.score) {
            return Err(ConfigError::Validation(format!(
                "response '{}' has score {} outside [0, 1]",
                entry.uid, entry.score
            )));
        }
        if !seen_uids.insert(entry.uid.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate response uid: '{}'",
                entry.uid
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "survey_test.rs"]
mod tests;
