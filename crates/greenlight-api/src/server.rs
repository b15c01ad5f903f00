use std::io;
use std::net::{TcpListener, TcpStream};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use greenlight_core::{EvaluationResult, ProjectInput, TariffSchedule};
use greenlight_eval::{EvaluationError, Evaluator};
use greenlight_model::{
    build_score_predictor, LinearModelConfig, RemoteScoreConfig, ScorePredictorConfig,
};
use parking_lot::Mutex;
use serde_json::json;

use crate::http::{read_http_request, write_http_response, HttpRequest, HttpResponse};
use crate::metrics::MetricsRegistry;
use crate::validate::validate;

pub struct ApiServer {
    evaluator: Evaluator,
    metrics: Mutex<MetricsRegistry>,
}

impl ApiServer {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            metrics: Mutex::new(MetricsRegistry::new()),
        }
    }

    /// Predictor selection and tariff overrides come from the environment;
    /// a misconfigured model fails here, at startup, not per request.
    pub fn from_env() -> Result<Self, String> {
        let predictor_cfg = predictor_config_from_env()?;
        let predictor = build_score_predictor(predictor_cfg).map_err(|e| e.to_string())?;
        Ok(Self::new(Evaluator::new(predictor, tariff_from_env())))
    }

    pub fn serve_http(&self, addr: &str) -> io::Result<()> {
        let listener = TcpListener::bind(addr)?;
        eprintln!(
            "greenlight-api http listening on {} (model: {})",
            listener.local_addr()?,
            self.evaluator.predictor_name()
        );
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = self.handle_connection(stream) {
                        eprintln!("greenlight-api http request error: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("greenlight-api http accept error: {err}");
                }
            }
        }
        Ok(())
    }

    fn handle_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        let Some(req) = read_http_request(&stream)? else {
            return Ok(());
        };
        let response = self.dispatch(req);
        write_http_response(&mut stream, response)
    }

    fn dispatch(&self, req: HttpRequest) -> HttpResponse {
        if req.method == "GET" && req.path == "/health" {
            return HttpResponse::json(200, json!({"status":"ok","timestamp_ms": now_ms()}));
        }

        if req.method == "GET" && req.path == "/metrics" {
            return HttpResponse::text(
                200,
                "text/plain; version=0.0.4; charset=utf-8",
                self.metrics.lock().render_text(),
            );
        }

        if req.method == "POST" && req.path == "/evaluate" {
            let start = Instant::now();
            let response = self.exec_evaluate(&req.body);
            self.metrics.lock().record_request(
                "evaluate",
                start.elapsed().as_secs_f64() * 1000.0,
                response.status >= 400,
            );
            return response;
        }

        if req.method != "GET" && req.method != "POST" {
            return HttpResponse::json(
                405,
                json!({"error":"method_not_allowed","message":"supported endpoints: GET /health, GET /metrics, POST /evaluate"}),
            );
        }

        HttpResponse::json(
            404,
            json!({"error":"not_found","message":"use POST /evaluate"}),
        )
    }

    fn exec_evaluate(&self, body: &[u8]) -> HttpResponse {
        let project: ProjectInput = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(err) => {
                return HttpResponse::json(
                    400,
                    json!({"error":"invalid_input","message": format!("parse error: {err}")}),
                );
            }
        };
        if let Err(message) = validate(&project) {
            return HttpResponse::json(400, json!({"error":"invalid_input","message": message}));
        }

        let result = match self.evaluate_blocking(&project) {
            Ok(v) => v,
            Err(EvaluationError::Scoring(err)) => {
                self.metrics.lock().record_scoring_failure();
                return HttpResponse::json(
                    500,
                    json!({"error":"scoring_failure","message": err.to_string()}),
                );
            }
            Err(EvaluationError::Internal(message)) => {
                return HttpResponse::json(
                    500,
                    json!({"error":"internal_error","message": message}),
                );
            }
        };

        self.metrics
            .lock()
            .record_evaluation(result.recommendation.label);
        match serde_json::to_value(&result) {
            Ok(payload) => HttpResponse::json(200, payload),
            Err(_) => HttpResponse::json(
                500,
                json!({"error":"internal_error","message":"failed to serialize evaluation result"}),
            ),
        }
    }

    fn evaluate_blocking(&self, project: &ProjectInput) -> Result<EvaluationResult, EvaluationError> {
        let rt = tokio::runtime::Runtime::new().map_err(|e| {
            EvaluationError::Internal(format!("evaluation runtime initialization failed: {e}"))
        })?;
        rt.block_on(self.evaluator.evaluate(project))
    }
}

fn predictor_config_from_env() -> Result<ScorePredictorConfig, String> {
    let name = std::env::var("GREENLIGHT_MODEL")
        .unwrap_or_else(|_| "baseline".to_string())
        .trim()
        .to_ascii_lowercase();
    match name.as_str() {
        "baseline" => Ok(ScorePredictorConfig::Baseline),
        "linear" => {
            let path = std::env::var("GREENLIGHT_MODEL_WEIGHTS").map_err(|_| {
                "GREENLIGHT_MODEL_WEIGHTS is required for the linear model".to_string()
            })?;
            Ok(ScorePredictorConfig::Linear(LinearModelConfig::new(path)))
        }
        "remote" => {
            let api_key = std::env::var("GREENLIGHT_SCORE_API_KEY").map_err(|_| {
                "GREENLIGHT_SCORE_API_KEY is required for the remote model".to_string()
            })?;
            let model = std::env::var("GREENLIGHT_SCORE_MODEL")
                .unwrap_or_else(|_| "grid-viability-v1".to_string());
            let mut config = RemoteScoreConfig::new(api_key, model);
            if let Ok(base_url) = std::env::var("GREENLIGHT_SCORE_BASE_URL") {
                if !base_url.trim().is_empty() {
                    config.base_url = base_url;
                }
            }
            config.timeout =
                Duration::from_millis(env_u64("GREENLIGHT_SCORE_TIMEOUT_MS", 8_000, 100, 60_000));
            Ok(ScorePredictorConfig::Remote(config))
        }
        other => Err(format!(
            "GREENLIGHT_MODEL must be baseline, linear or remote (got {other})"
        )),
    }
}

fn tariff_from_env() -> TariffSchedule {
    let defaults = TariffSchedule::default();
    TariffSchedule {
        solar_base: env_f64("GREENLIGHT_PRICE_SOLAR", defaults.solar_base, 0.0, 10.0),
        wind_base: env_f64("GREENLIGHT_PRICE_WIND", defaults.wind_base, 0.0, 10.0),
        hybrid_base: env_f64("GREENLIGHT_PRICE_HYBRID", defaults.hybrid_base, 0.0, 10.0),
        urban_multiplier: env_f64(
            "GREENLIGHT_PRICE_URBAN_MULT",
            defaults.urban_multiplier,
            0.0,
            10.0,
        ),
        semi_urban_multiplier: env_f64(
            "GREENLIGHT_PRICE_SEMI_URBAN_MULT",
            defaults.semi_urban_multiplier,
            0.0,
            10.0,
        ),
        rural_multiplier: env_f64(
            "GREENLIGHT_PRICE_RURAL_MULT",
            defaults.rural_multiplier,
            0.0,
            10.0,
        ),
        subsidy_uplift: env_f64(
            "GREENLIGHT_SUBSIDY_UPLIFT",
            defaults.subsidy_uplift,
            0.0,
            10.0,
        ),
        carbon_price_per_ton: env_f64(
            "GREENLIGHT_CARBON_PRICE",
            defaults.carbon_price_per_ton,
            0.0,
            10_000.0,
        ),
        social_value_per_beneficiary: env_f64(
            "GREENLIGHT_SOCIAL_VALUE",
            defaults.social_value_per_beneficiary,
            0.0,
            1_000.0,
        ),
    }
}

fn env_f64(name: &str, default: f64, min: f64, max: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

fn env_u64(name: &str, default: u64, min: u64, max: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
