use metrics_exporter_prometheus::PrometheusHandle;
use name_normalizer::workflows::names::OverflowPolicy;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_overflow(raw: &str) -> Result<OverflowPolicy, String> {
    raw.parse::<OverflowPolicy>().map_err(|err| err.to_string())
}
