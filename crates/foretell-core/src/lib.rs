//! Shared data model and configuration for Foretell.
//!
//! Holds the response/survey types exchanged between the sentiment adapter
//! and the reward engine, the threshold math that maps a classifier score to
//! a polarity and intensity, and env-driven application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod polarity;
pub mod sentiment;
pub mod survey;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, SubmissionError};
pub use polarity::{InvalidPolarity, Polarity, PolarityMap};
pub use sentiment::{SentimentReading, SentimentThresholds};
pub use survey::{load_survey, ResponseEntry, Reward, Survey};
