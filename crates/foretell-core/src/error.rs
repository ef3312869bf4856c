use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read survey file {path}: {source}")]
    SurveyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse survey file: {0}")]
    SurveyFileParse(String),

    #[error("survey validation failed: {0}")]
    Validation(String),
}

/// Reasons a new response is refused before it reaches the survey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("response text must be non-empty")]
    EmptyAnswer,

    #[error("survey {0} has expired")]
    Expired(String),

    #[error("survey {survey_id} already has {max} responses")]
    Full { survey_id: String, max: u32 },

    #[error("user {0} has already responded")]
    DuplicateUid(String),
}
