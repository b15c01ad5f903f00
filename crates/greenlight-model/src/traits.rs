use async_trait::async_trait;

use crate::error::ModelError;
use crate::features::FeatureVector;

#[async_trait]
pub trait ScorePredictor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}
