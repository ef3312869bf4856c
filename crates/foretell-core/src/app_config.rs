use crate::sentiment::SentimentThresholds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub thresholds: SentimentThresholds,
    pub min_weight: f64,
    pub default_reward_pool: f64,
    pub classifier_url: Option<String>,
    pub classifier_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("thresholds", &self.thresholds)
            .field("min_weight", &self.min_weight)
            .field("default_reward_pool", &self.default_reward_pool)
            // Endpoint URLs may embed access tokens.
            .field(
                "classifier_url",
                &self.classifier_url.as_ref().map(|_| "[redacted]"),
            )
            .field("classifier_timeout_secs", &self.classifier_timeout_secs)
            .finish()
    }
}
