use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::RemoteScoreConfig;
use crate::error::ModelError;
use crate::features::FeatureVector;
use crate::traits::ScorePredictor;

/// Remote inference endpoint speaking a small JSON contract: named features
/// in, a single score out.
#[derive(Clone)]
pub struct RemoteScoreModel {
    config: RemoteScoreConfig,
    client: Client,
}

impl RemoteScoreModel {
    pub fn new(config: RemoteScoreConfig) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/score", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl ScorePredictor for RemoteScoreModel {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.is_empty() {
            return Err(ModelError::Encoding("feature vector is empty".to_string()));
        }

        let mut named = Map::new();
        for (name, value) in features.named() {
            named.insert(name.to_string(), Value::from(value));
        }
        let mut payload = Map::new();
        payload.insert(
            "model".to_string(),
            Value::String(self.config.model.clone()),
        );
        payload.insert("features".to_string(), Value::Object(named));

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ModelError::Api { status, body });
        }

        let parsed: RemoteScoreResponse = res.json().await?;
        if !parsed.score.is_finite() {
            return Err(ModelError::InvalidResponse(
                "score is not a finite number".to_string(),
            ));
        }
        Ok(parsed.score)
    }
}

#[derive(Debug, Deserialize)]
struct RemoteScoreResponse {
    score: f64,
}
