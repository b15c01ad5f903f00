pub mod evaluator;

pub use evaluator::*;
pub use greenlight_core::*;
pub use greenlight_model::{
    build_score_predictor, encode_features, BaselineScoreModel, FeatureVector, LinearModelConfig,
    LinearScoreModel, ModelError, RemoteScoreConfig, RemoteScoreModel, ScorePredictor,
    ScorePredictorConfig, FEATURE_NAMES,
};
