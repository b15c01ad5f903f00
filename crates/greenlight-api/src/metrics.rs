use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct EndpointMetric {
    ok: u64,
    err: u64,
    total_latency_ms: f64,
    max_latency_ms: f64,
}

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    endpoint: HashMap<String, EndpointMetric>,
    evaluations_total: u64,
    scoring_failures_total: u64,
    recommendation: HashMap<String, u64>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&mut self, endpoint: &str, latency_ms: f64, is_error: bool) {
        let metric = self.endpoint.entry(endpoint.to_string()).or_default();
        if is_error {
            metric.err = metric.err.saturating_add(1);
        } else {
            metric.ok = metric.ok.saturating_add(1);
        }
        metric.total_latency_ms += latency_ms;
        metric.max_latency_ms = metric.max_latency_ms.max(latency_ms);
    }

    pub fn record_evaluation(&mut self, label: &str) {
        self.evaluations_total = self.evaluations_total.saturating_add(1);
        let count = self.recommendation.entry(label.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn record_scoring_failure(&mut self) {
        self.scoring_failures_total = self.scoring_failures_total.saturating_add(1);
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![
            "# TYPE greenlight_http_requests_total counter".to_string(),
            "# TYPE greenlight_http_latency_ms_sum counter".to_string(),
            "# TYPE greenlight_http_latency_ms_count counter".to_string(),
            "# TYPE greenlight_evaluations_total counter".to_string(),
            "# TYPE greenlight_scoring_failures_total counter".to_string(),
            "# TYPE greenlight_recommendations_total counter".to_string(),
        ];

        let mut endpoints: Vec<(&String, &EndpointMetric)> = self.endpoint.iter().collect();
        endpoints.sort_by(|a, b| a.0.cmp(b.0));
        for (endpoint, m) in endpoints {
            let label = prom_label_value(endpoint);
            lines.push(format!(
                "greenlight_http_requests_total{{endpoint=\"{}\",status=\"ok\"}} {}",
                label, m.ok
            ));
            lines.push(format!(
                "greenlight_http_requests_total{{endpoint=\"{}\",status=\"error\"}} {}",
                label, m.err
            ));
            lines.push(format!(
                "greenlight_http_latency_ms_sum{{endpoint=\"{}\"}} {:.3}",
                label, m.total_latency_ms
            ));
            lines.push(format!(
                "greenlight_http_latency_ms_count{{endpoint=\"{}\"}} {}",
                label,
                m.ok + m.err
            ));
            lines.push(format!(
                "greenlight_http_latency_ms_max{{endpoint=\"{}\"}} {:.3}",
                label, m.max_latency_ms
            ));
        }

        lines.push(format!(
            "greenlight_evaluations_total {}",
            self.evaluations_total
        ));
        lines.push(format!(
            "greenlight_scoring_failures_total {}",
            self.scoring_failures_total
        ));

        let mut labels: Vec<(&String, &u64)> = self.recommendation.iter().collect();
        labels.sort_by(|a, b| a.0.cmp(b.0));
        for (label, count) in labels {
            lines.push(format!(
                "greenlight_recommendations_total{{label=\"{}\"}} {}",
                prom_label_value(label),
                count
            ));
        }

        lines.join("\n")
    }
}

fn prom_label_value(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_recorded_requests() {
        let mut registry = MetricsRegistry::new();
        registry.record_request("evaluate", 12.5, false);
        registry.record_request("evaluate", 3.5, true);
        registry.record_evaluation("Consider");
        registry.record_scoring_failure();

        let text = registry.render_text();
        assert!(text.contains("greenlight_http_requests_total{endpoint=\"evaluate\",status=\"ok\"} 1"));
        assert!(
            text.contains("greenlight_http_requests_total{endpoint=\"evaluate\",status=\"error\"} 1")
        );
        assert!(text.contains("greenlight_http_latency_ms_count{endpoint=\"evaluate\"} 2"));
        assert!(text.contains("greenlight_evaluations_total 1"));
        assert!(text.contains("greenlight_scoring_failures_total 1"));
        assert!(text.contains("greenlight_recommendations_total{label=\"Consider\"} 1"));
    }

    #[test]
    fn empty_registry_renders_type_lines_only_plus_totals() {
        let text = MetricsRegistry::new().render_text();
        assert!(text.contains("# TYPE greenlight_http_requests_total counter"));
        assert!(text.contains("greenlight_evaluations_total 0"));
    }
}
