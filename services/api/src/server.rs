use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_name_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use name_normalizer::config::AppConfig;
use name_normalizer::error::AppError;
use name_normalizer::telemetry;
use name_normalizer::workflows::names::NamePipeline;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pipeline = NamePipeline::new(config.pipeline);
    let app = with_name_routes(pipeline)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        deduplicate = config.pipeline.deduplicate,
        overflow = %config.pipeline.overflow,
        "name normalizer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
