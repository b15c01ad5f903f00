use std::sync::Arc;

use crate::config::ScorePredictorConfig;
use crate::error::ModelError;
use crate::providers::{BaselineScoreModel, LinearScoreModel, RemoteScoreModel};
use crate::traits::ScorePredictor;

pub fn build_score_predictor(
    cfg: ScorePredictorConfig,
) -> Result<Arc<dyn ScorePredictor>, ModelError> {
    match cfg {
        ScorePredictorConfig::Baseline => Ok(Arc::new(BaselineScoreModel::new())),
        ScorePredictorConfig::Linear(c) => Ok(Arc::new(LinearScoreModel::from_config(&c)?)),
        ScorePredictorConfig::Remote(c) => Ok(Arc::new(RemoteScoreModel::new(c)?)),
    }
}
