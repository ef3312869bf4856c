//! Text classification and response submission handlers.

use std::path::Path;

use chrono::Utc;
use foretell_core::{AppConfig, ResponseEntry};
use foretell_sentiment::{analyze_text, ConfiguredClassifier};

fn build_classifier(config: &AppConfig) -> anyhow::Result<ConfiguredClassifier> {
    let classifier = ConfiguredClassifier::from_url(
        config.classifier_url.as_deref(),
        config.classifier_timeout_secs,
    )?;
    let kind = match &classifier {
        ConfiguredClassifier::Lexicon(_) => "lexicon",
        ConfiguredClassifier::Http(_) => "http",
    };
    tracing::debug!(kind, "classifier ready");
    Ok(classifier)
}

/// Classify `text` and print its reading.
///
/// # Errors
///
/// Returns an error if the classifier client cannot be built. Classification
/// failures themselves fall back to the neutral reading.
pub(crate) async fn run_classify(config: &AppConfig, text: &str, json: bool) -> anyhow::Result<()> {
    let classifier = build_classifier(config)?;
    let reading = analyze_text(Some(&classifier), text, &config.thresholds).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        println!(
            "polarity={} ({})  score={:.4}  intensity={:.3}",
            reading.polarity,
            reading.polarity.label(),
            reading.score,
            reading.intensity
        );
    }
    Ok(())
}

/// Validate a new response against a survey and print the resulting entry.
///
/// The survey file is not modified.
///
/// # Errors
///
/// Returns an error if the survey cannot be loaded, no uid is given for a
/// non-anonymous survey, or the survey refuses the submission.
pub(crate) async fn run_submit(
    config: &AppConfig,
    survey_path: &Path,
    answer: &str,
    uid: Option<&str>,
) -> anyhow::Result<()> {
    let survey = foretell_core::load_survey(survey_path)?;

    let uid = match uid {
        Some(uid) => uid.to_string(),
        None if survey.allow_anonymity => ResponseEntry::anonymous_uid(),
        None => anyhow::bail!(
            "survey '{}' does not allow anonymous responses; pass --uid",
            survey.survey_id
        ),
    };

    let now = Utc::now();
    survey.check_submission(&uid, answer, now)?;

    let classifier = build_classifier(config)?;
    let reading = analyze_text(Some(&classifier), answer, &config.thresholds).await;
    let entry = ResponseEntry::from_reading(uid, answer, reading, now);

    tracing::info!(
        survey_id = %survey.survey_id,
        uid = %entry.uid,
        polarity = %entry.polarity,
        "response accepted"
    );
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
