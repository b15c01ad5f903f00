use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LinearModelConfig {
    pub weights_path: PathBuf,
}

impl LinearModelConfig {
    pub fn new(weights_path: impl Into<PathBuf>) -> Self {
        Self {
            weights_path: weights_path.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoteScoreConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl RemoteScoreConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "http://127.0.0.1:9900".to_string(),
            model: model.into(),
            timeout: Duration::from_secs(8),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScorePredictorConfig {
    Baseline,
    Linear(LinearModelConfig),
    Remote(RemoteScoreConfig),
}
